//! "Select all" checkbox group.
//!
//! The group box mirrors whether every item is checked. There is no
//! indeterminate state.

#[cfg(test)]
#[path = "checkbox_test.rs"]
mod checkbox_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckGroup {
    items: Vec<bool>,
    all: bool,
}

impl CheckGroup {
    /// A group of `len` unchecked items.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { items: vec![false; len], all: false }
    }

    /// The group box changed: every item takes its value.
    pub fn set_all(&mut self, checked: bool) {
        self.items.iter_mut().for_each(|item| *item = checked);
        self.all = checked;
    }

    /// One item changed: recompute the group box. Out-of-range indices are
    /// ignored.
    pub fn set_item(&mut self, index: usize, checked: bool) {
        if let Some(item) = self.items.get_mut(index) {
            *item = checked;
            self.all = self.items.iter().all(|c| *c);
        }
    }

    #[must_use]
    pub fn all_checked(&self) -> bool {
        self.all
    }

    #[must_use]
    pub fn item(&self, index: usize) -> bool {
        self.items.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn items(&self) -> &[bool] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
