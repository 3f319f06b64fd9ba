//! Prefix-based line classification and highlighting.
//!
//! Each line is tested against an ordered rule table; the first rule whose
//! prefix matches (case-insensitively) styles the whole line. Offsets
//! advance by `chars + 1` per line, which must match the `'\n'` separator
//! the presenter joins with — if the two ever disagree, every styled range
//! after the first line lands on the wrong text.

use crate::view::surface::TextSurface;

/// Semantic category a line can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    /// Outbound traffic ("send ...").
    Outgoing,
    /// Inbound traffic ("receive ...").
    Incoming,
    /// Success acknowledgement ("ok ...").
    Success,
    /// Error report ("error ...").
    Failure,
}

/// A prefix-to-color classification rule.
///
/// A rule carries a list of prefixes so localized spellings of the same
/// category can be added without touching the matching loop.
#[derive(Debug, Clone, Copy)]
pub struct HighlightRule {
    /// Case-insensitive prefixes that select this rule.
    pub prefixes: &'static [&'static str],
    /// Color applied to a matching line.
    pub color: ColorTag,
}

impl HighlightRule {
    fn matches(&self, line: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| starts_with_ignore_case(line, prefix))
    }
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    let mut chars = line.chars();
    prefix
        .chars()
        .all(|p| matches!(chars.next(), Some(c) if c.eq_ignore_ascii_case(&p)))
}

/// The fixed default rule table, in match order.
pub fn default_rules() -> &'static [HighlightRule] {
    const RULES: &[HighlightRule] = &[
        HighlightRule {
            prefixes: &["send"],
            color: ColorTag::Outgoing,
        },
        HighlightRule {
            prefixes: &["receive"],
            color: ColorTag::Incoming,
        },
        HighlightRule {
            prefixes: &["ok"],
            color: ColorTag::Success,
        },
        HighlightRule {
            prefixes: &["error"],
            color: ColorTag::Failure,
        },
    ];
    RULES
}

/// Classify the just-rendered lines.
///
/// Returns the category of `line` under `rules`, or `None` when no rule
/// matches (default styling).
pub fn classify(line: &str, rules: &[HighlightRule]) -> Option<ColorTag> {
    rules.iter().find(|rule| rule.matches(line)).map(|r| r.color)
}

/// Style each matching line of `lines` on `surface`.
///
/// `lines` must be exactly the batch the surface's text was joined from;
/// the running offset assumes a one-character separator between lines.
pub fn apply_highlights<S: TextSurface + ?Sized>(
    surface: &mut S,
    lines: &[String],
    rules: &[HighlightRule],
) {
    let mut offset = 0;
    for line in lines {
        let len = line.chars().count();
        if let Some(color) = classify(line, rules) {
            surface.style_range(offset, len, color);
        }
        offset += len + 1;
    }
}
