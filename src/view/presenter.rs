//! Rendering a line batch into the text surface.

use crate::model::{LineBatch, LogViewConfig};
use crate::view::highlight::{self, HighlightRule};
use crate::view::surface::TextSurface;
use tracing::debug;

/// Pushes line batches into a [`TextSurface`].
///
/// Each render is a full text replace; the view size is bounded, so no
/// incremental diffing is attempted. The presenter owns the highlight rule
/// table so the joining separator and the offset arithmetic in
/// [`highlight::apply_highlights`] stay in one place.
#[derive(Debug)]
pub struct LogPresenter {
    rules: Vec<HighlightRule>,
}

impl LogPresenter {
    /// Presenter with the default rule table.
    pub fn new() -> Self {
        Self {
            rules: highlight::default_rules().to_vec(),
        }
    }

    /// Presenter with a caller-supplied rule table (e.g. with localized
    /// prefixes appended).
    pub fn with_rules(rules: Vec<HighlightRule>) -> Self {
        Self { rules }
    }

    /// Render `lines` into `surface` under `config`.
    ///
    /// The selection is captured before the text replace so a render the
    /// user did not initiate keeps their place; with `auto_scroll` the
    /// caret instead parks at the end of the new text. Highlighting runs
    /// strictly after the replace, over the text just set.
    pub fn render<S: TextSurface + ?Sized>(
        &self,
        surface: &mut S,
        lines: &LineBatch,
        config: &LogViewConfig,
    ) {
        let (sel_start, sel_length) = surface.selection();

        surface.set_text(&lines.join("\n"));

        if config.auto_scroll {
            surface.set_selection(surface.text_len(), 0);
        } else {
            // The surface clamps if the new text is shorter than the old
            // selection offsets.
            surface.set_selection(sel_start, sel_length);
        }
        surface.scroll_to_selection();

        if config.colorize {
            highlight::apply_highlights(surface, lines, &self.rules);
        }
        debug!(lines = lines.len(), colorize = config.colorize, "rendered batch");
    }
}

impl Default for LogPresenter {
    fn default() -> Self {
        Self::new()
    }
}
