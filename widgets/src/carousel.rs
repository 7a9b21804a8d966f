//! Home page carousels.
//!
//! [`Carousel`] is the wrap-around main slide with indicator dots and
//! autoplay; [`Slider`] is the product strip that slides by a fixed width and
//! stops at both ends.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::consts::{SLIDER_MAX_INDEX, SLIDER_WIDTH_PX};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    playing: bool,
}

impl Carousel {
    /// A carousel over `len` slides, autoplaying from the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, current: 0, playing: true }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + self.len - 1) % self.len;
        }
        self.current
    }

    /// Jump to an indicator. Returns `true` when the autoplay timer must be
    /// restarted so the new slide gets a full interval.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        self.playing
    }

    /// Flip autoplay; returns the new playing state.
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Autoplay interval elapsed.
    pub fn tick(&mut self) -> usize {
        if self.playing {
            self.next()
        } else {
            self.current
        }
    }

    /// Label for the play/pause control.
    #[must_use]
    pub fn play_label(&self) -> &'static str {
        if self.playing { "⏸️" } else { "▶️" }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slider {
    index: usize,
    max_index: usize,
    width_px: i32,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(SLIDER_MAX_INDEX, SLIDER_WIDTH_PX)
    }
}

impl Slider {
    #[must_use]
    pub fn new(max_index: usize, width_px: i32) -> Self {
        Self { index: 0, max_index, width_px }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.max_index);
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Horizontal translation of the strip in pixels.
    #[must_use]
    pub fn offset_px(&self) -> i32 {
        let index = i32::try_from(self.index).unwrap_or(i32::MAX);
        index.saturating_mul(self.width_px).saturating_neg()
    }
}
