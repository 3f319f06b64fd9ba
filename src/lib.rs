//! tailview
//!
//! Live log-tailing viewer: bounded incremental reads of a growing log
//! file, rendered into a scrollable text surface with prefix-based line
//! highlighting. The library exposes the embeddable components
//! ([`viewer::RefreshCycle`], [`view::LogPresenter`], [`source::read_lines`],
//! [`view::TextSurface`]); the binary wraps them in a ratatui shell.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
pub mod viewer;

#[cfg(test)]
mod tests;
