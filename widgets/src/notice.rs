//! Transient floating notifications.
//!
//! Pages surface collaborator failures (news refresh, availability lookup)
//! and one-shot confirmations (profile saved) as notices that dismiss
//! themselves after [`NOTICE_DISMISS_MS`](crate::consts::NOTICE_DISMISS_MS).
//! The timer is cosmetic: dismissing an id that is already gone is a no-op.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    /// CSS modifier class for the notice box.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "notification success",
            Self::Error => "notification error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice; returns its id for the dismiss timer.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.items.push(Notice { id, level, message: message.into() });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message)
    }

    /// Returns whether a notice was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Oldest first.
    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
