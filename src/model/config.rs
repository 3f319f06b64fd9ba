//! Per-refresh view configuration.

/// View policy applied on each refresh.
///
/// Immutable during a single refresh; the owner may change fields between
/// refreshes (e.g. toggling follow mode from a key binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogViewConfig {
    /// Read the whole file instead of only the tail window.
    pub full_view: bool,
    /// Size of the tail window in bytes when `full_view` is false.
    pub view_size_bytes: u64,
    /// Park the caret at the end of the text after each render so the view
    /// follows new content. When false, the pre-render selection is
    /// restored instead.
    pub auto_scroll: bool,
    /// Apply prefix-based line highlighting after each render.
    pub colorize: bool,
}

impl Default for LogViewConfig {
    fn default() -> Self {
        Self {
            full_view: false,
            view_size_bytes: 16 * 1024,
            auto_scroll: true,
            colorize: true,
        }
    }
}
