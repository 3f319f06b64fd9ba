//! Counting probe surface for acceptance tests.

use crate::view::highlight::ColorTag;
use crate::view::surface::{StyledBuffer, TextSurface};

/// Wraps a [`StyledBuffer`] and counts `set_text` calls, so tests can
/// assert how many renders a sequence of refreshes produced.
#[derive(Debug, Default)]
pub struct ProbeSurface {
    pub inner: StyledBuffer,
    pub set_text_calls: usize,
}

impl ProbeSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextSurface for ProbeSurface {
    fn selection(&self) -> (usize, usize) {
        self.inner.selection()
    }

    fn set_text(&mut self, text: &str) {
        self.set_text_calls += 1;
        self.inner.set_text(text);
    }

    fn set_selection(&mut self, start: usize, length: usize) {
        self.inner.set_selection(start, length);
    }

    fn scroll_to_selection(&mut self) {
        self.inner.scroll_to_selection();
    }

    fn style_range(&mut self, start: usize, length: usize, color: ColorTag) {
        self.inner.style_range(start, length, color);
    }

    fn text_len(&self) -> usize {
        self.inner.text_len()
    }
}
