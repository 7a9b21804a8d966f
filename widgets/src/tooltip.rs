//! Hover tooltip for read-only fields.
//!
//! Entering the field shows the tooltip and arms a dismiss timer; leaving
//! hides it at once. Each show gets a fresh [`TooltipToken`], so a timer left
//! over from an earlier hover cannot hide the current one.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipToken(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tooltip {
    shown: Option<TooltipToken>,
    generation: u64,
}

impl Tooltip {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// Pointer entered. Replaces any tooltip already showing.
    pub fn show(&mut self) -> TooltipToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TooltipToken(self.generation);
        self.shown = Some(token);
        token
    }

    /// Pointer left.
    pub fn hide(&mut self) {
        self.shown = None;
    }

    /// Dismiss timer fired. Returns whether the tooltip was hidden.
    pub fn expire(&mut self, token: TooltipToken) -> bool {
        if self.shown != Some(token) {
            return false;
        }
        self.shown = None;
        true
    }
}
