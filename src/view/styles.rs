//! Color configuration and the tag-to-style map.
//!
//! Provides distinct colors for the four line categories (outgoing,
//! incoming, success, failure).

use crate::view::highlight::ColorTag;
use ratatui::style::{Color, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== HighlightStyles =====

/// Style for each [`ColorTag`] category.
///
/// With colors disabled every category resolves to the default style, so
/// highlighted and plain lines render identically.
#[derive(Debug, Clone, Copy)]
pub struct HighlightStyles {
    outgoing: Style,
    incoming: Style,
    success: Style,
    failure: Style,
}

impl HighlightStyles {
    /// Build styles honoring the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self::colored()
        } else {
            Self {
                outgoing: Style::default(),
                incoming: Style::default(),
                success: Style::default(),
                failure: Style::default(),
            }
        }
    }

    /// The default color scheme, unconditionally colored.
    pub fn colored() -> Self {
        Self {
            outgoing: Style::default().fg(Color::Cyan),
            incoming: Style::default().fg(Color::Magenta),
            success: Style::default().fg(Color::Green),
            failure: Style::default().fg(Color::Red),
        }
    }

    /// Resolve the style for a tag.
    pub fn style_for(&self, tag: ColorTag) -> Style {
        match tag {
            ColorTag::Outgoing => self.outgoing,
            ColorTag::Incoming => self.incoming,
            ColorTag::Success => self.success,
            ColorTag::Failure => self.failure,
        }
    }
}

impl Default for HighlightStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
