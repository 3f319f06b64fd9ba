//! Text surface capability and its in-memory implementation.
//!
//! The presenter and highlighter talk to a [`TextSurface`], not to the
//! terminal: whatever renders the text (the ratatui shell here, a different
//! widget elsewhere) sits behind this trait. Offsets are character offsets
//! into the surface's current text.

use crate::view::highlight::ColorTag;
use crate::view::styles::HighlightStyles;
use ratatui::text::{Line, Text};

/// Minimal text-rendering capability the viewer writes into.
///
/// A selection is `(start, length)` in characters; a zero-length selection
/// is a caret. Implementations clamp out-of-range selections rather than
/// fail, since a re-render can shrink the text underneath a stored
/// selection.
pub trait TextSurface {
    /// Current selection as `(start, length)` in characters.
    fn selection(&self) -> (usize, usize);

    /// Replace the entire text content. Clears any per-range styling.
    fn set_text(&mut self, text: &str);

    /// Set the selection, clamped to the current text length.
    fn set_selection(&mut self, start: usize, length: usize);

    /// Scroll so the selection start is visible.
    fn scroll_to_selection(&mut self);

    /// Apply a color tag to a character range of the current text.
    fn style_range(&mut self, start: usize, length: usize, color: ColorTag);

    /// Length of the current text in characters.
    fn text_len(&self) -> usize;
}

/// A styled character range recorded by [`StyledBuffer::style_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRange {
    /// Start offset in characters.
    pub start: usize,
    /// Length in characters.
    pub length: usize,
    /// Color applied to the range.
    pub color: ColorTag,
}

/// In-memory [`TextSurface`]: text, selection, styled ranges, scroll target.
///
/// The TUI shell lowers it to a ratatui [`Text`] per frame via
/// [`StyledBuffer::to_text`]. Styled ranges are line-aligned in practice
/// (the highlighter styles whole lines), so lowering resolves one style per
/// line.
#[derive(Debug, Default)]
pub struct StyledBuffer {
    text: String,
    char_len: usize,
    sel_start: usize,
    sel_length: usize,
    ranges: Vec<StyledRange>,
    scroll_line: usize,
}

impl StyledBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Styled ranges applied since the last `set_text`.
    pub fn ranges(&self) -> &[StyledRange] {
        &self.ranges
    }

    /// Line index the last `scroll_to_selection` targeted.
    pub fn scroll_line(&self) -> usize {
        self.scroll_line
    }

    /// Line index containing the selection start.
    fn line_of_selection(&self) -> usize {
        let mut line = 0;
        for (i, ch) in self.text.chars().enumerate() {
            if i >= self.sel_start {
                break;
            }
            if ch == '\n' {
                line += 1;
            }
        }
        line
    }

    /// Lower the buffer to a ratatui `Text`, resolving recorded ranges to
    /// per-line styles.
    pub fn to_text(&self, styles: &HighlightStyles) -> Text<'_> {
        let mut lines = Vec::new();
        let mut offset = 0;
        for raw in self.text.split('\n') {
            let len = raw.chars().count();
            let style = self
                .ranges
                .iter()
                .find(|r| r.start <= offset && offset < r.start + r.length.max(1))
                .map(|r| styles.style_for(r.color));
            lines.push(match style {
                Some(style) => Line::styled(raw, style),
                None => Line::raw(raw),
            });
            offset += len + 1;
        }
        Text::from(lines)
    }

    fn clamp_selection(&mut self) {
        if self.sel_start > self.char_len {
            self.sel_start = self.char_len;
        }
        if self.sel_start + self.sel_length > self.char_len {
            self.sel_length = self.char_len - self.sel_start;
        }
    }
}

impl TextSurface for StyledBuffer {
    fn selection(&self) -> (usize, usize) {
        (self.sel_start, self.sel_length)
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.char_len = self.text.chars().count();
        self.ranges.clear();
        self.clamp_selection();
    }

    fn set_selection(&mut self, start: usize, length: usize) {
        self.sel_start = start;
        self.sel_length = length;
        self.clamp_selection();
    }

    fn scroll_to_selection(&mut self) {
        self.scroll_line = self.line_of_selection();
    }

    fn style_range(&mut self, start: usize, length: usize, color: ColorTag) {
        self.ranges.push(StyledRange {
            start,
            length,
            color,
        });
    }

    fn text_len(&self) -> usize {
        self.char_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_replaces_content_and_clears_ranges() {
        let mut buf = StyledBuffer::new();
        buf.set_text("old content");
        buf.style_range(0, 3, ColorTag::Outgoing);

        buf.set_text("new");

        assert_eq!(buf.text(), "new");
        assert!(
            buf.ranges().is_empty(),
            "replacing the text must drop stale styling"
        );
    }

    #[test]
    fn text_len_counts_characters_not_bytes() {
        let mut buf = StyledBuffer::new();
        buf.set_text("héllo");
        assert_eq!(buf.text_len(), 5);
    }

    #[test]
    fn set_selection_clamps_to_text_length() {
        let mut buf = StyledBuffer::new();
        buf.set_text("short");

        buf.set_selection(100, 50);

        assert_eq!(buf.selection(), (5, 0));
    }

    #[test]
    fn set_text_clamps_existing_selection() {
        let mut buf = StyledBuffer::new();
        buf.set_text("a long line of text");
        buf.set_selection(10, 5);

        buf.set_text("tiny");

        let (start, length) = buf.selection();
        assert!(start + length <= buf.text_len());
    }

    #[test]
    fn selection_survives_equal_length_replace() {
        let mut buf = StyledBuffer::new();
        buf.set_text("abcdef");
        buf.set_selection(3, 0);

        buf.set_text("uvwxyz");

        assert_eq!(buf.selection(), (3, 0));
    }

    #[test]
    fn scroll_to_selection_targets_caret_line() {
        let mut buf = StyledBuffer::new();
        buf.set_text("one\ntwo\nthree");
        buf.set_selection(9, 0); // inside "three"

        buf.scroll_to_selection();

        assert_eq!(buf.scroll_line(), 2);
    }

    #[test]
    fn to_text_styles_only_ranged_lines() {
        let styles = HighlightStyles::colored();
        let mut buf = StyledBuffer::new();
        buf.set_text("ok fine\nplain\nerror bad");
        buf.style_range(0, 7, ColorTag::Success);
        buf.style_range(14, 9, ColorTag::Failure);

        let text = buf.to_text(&styles);

        assert_eq!(text.lines.len(), 3);
        assert_ne!(text.lines[0].style, text.lines[1].style);
        assert_ne!(text.lines[2].style, text.lines[1].style);
    }
}
