//! Navigation mega dropdown.
//!
//! Hovering a top-level item opens the shared dropdown and highlights the
//! matching column. Leaving the item or the dropdown schedules a close after
//! [`MENU_CLOSE_DELAY_MS`](crate::consts::MENU_CLOSE_DELAY_MS); re-entering
//! either cancels it. Timers are identified by a [`CloseToken`] so a timer
//! that fires after a newer hover is ignored instead of closing the menu
//! under the cursor.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Identifies one scheduled close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseToken(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MegaMenu {
    open: bool,
    active: Option<usize>,
    pending: Option<CloseToken>,
    generation: u64,
}

impl MegaMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Highlighted item and column.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    #[must_use]
    pub fn close_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn hover_item(&mut self, index: usize) {
        self.pending = None;
        self.open = true;
        self.active = Some(index);
    }

    /// Pointer left an item or the dropdown. The caller arms a timer and hands
    /// the token back to [`MegaMenu::close_elapsed`].
    pub fn leave(&mut self) -> CloseToken {
        self.generation = self.generation.wrapping_add(1);
        let token = CloseToken(self.generation);
        self.pending = Some(token);
        token
    }

    pub fn hover_dropdown(&mut self) {
        self.pending = None;
    }

    /// A close timer fired. Returns whether the menu actually closed.
    pub fn close_elapsed(&mut self, token: CloseToken) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.pending = None;
        self.open = false;
        self.active = None;
        true
    }
}
