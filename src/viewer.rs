//! Refresh orchestration: change detection, read, render.
//!
//! `RefreshCycle` is driven by an external poller (the TUI shell's timer
//! tick here). It re-reads and re-renders only when the file's last-modified
//! timestamp differs from the one cached at the previous successful render,
//! so an idle file costs one `stat` per poll.

use crate::model::{LogFileHandle, LogViewConfig, TailError};
use crate::source;
use crate::view::presenter::LogPresenter;
use crate::view::surface::TextSurface;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Placeholder shown when the tailed file does not exist.
pub const PLACEHOLDER_FILE_NOT_FOUND: &str = "(log file not found)";

/// Placeholder shown when the file exists but yields no lines.
pub const PLACEHOLDER_NO_DATA: &str = "(no data)";

/// Ties a [`LogFileHandle`] to a [`LogPresenter`] and runs the poll cycle.
///
/// `refresh` never fails: every error is converted into a placeholder
/// render, and the cached timestamp is only advanced on success so the next
/// poll retries after a transient failure.
#[derive(Debug)]
pub struct RefreshCycle {
    handle: LogFileHandle,
    presenter: LogPresenter,
}

impl RefreshCycle {
    /// Create a cycle tailing `path` with the default presenter.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            handle: LogFileHandle::new(path),
            presenter: LogPresenter::new(),
        }
    }

    /// Create a cycle with a custom presenter (e.g. extended rules).
    pub fn with_presenter(path: impl Into<PathBuf>, presenter: LogPresenter) -> Self {
        Self {
            handle: LogFileHandle::new(path),
            presenter,
        }
    }

    /// The tailed file's path.
    pub fn path(&self) -> &Path {
        self.handle.path()
    }

    /// Retarget the cycle at a different file.
    ///
    /// Forces the next `refresh` to reload unconditionally, even if the new
    /// file's timestamp equals the old one's.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.handle.set_path(path);
    }

    /// Run one poll cycle against `surface`.
    ///
    /// No-op when the file's timestamp matches the cached one. Otherwise
    /// reads the current view via [`source::read_lines`] and renders it,
    /// substituting a single placeholder line for a missing file, an empty
    /// batch, or a read error.
    pub fn refresh<S: TextSurface + ?Sized>(&mut self, surface: &mut S, config: &LogViewConfig) {
        let path = self.handle.path();

        if !path.exists() {
            debug!(path = %path.display(), "tailed file missing");
            self.render_placeholder(surface, config, PLACEHOLDER_FILE_NOT_FOUND.to_string());
            return;
        }

        let modified = match file_modified(path) {
            Ok(modified) => modified,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not stat tailed file");
                self.render_placeholder(surface, config, format!("(log error: {err})"));
                return;
            }
        };

        if self.handle.last_seen_modified() == Some(modified) {
            return;
        }

        match source::read_lines(path, config.full_view, config.view_size_bytes) {
            Ok(lines) => {
                let lines = if lines.is_empty() {
                    vec![PLACEHOLDER_NO_DATA.to_string()]
                } else {
                    lines
                };
                self.presenter.render(surface, &lines, config);
                // Only a rendered read advances the cache; failures above
                // and below leave it untouched so the next poll retries.
                self.handle.mark_seen(modified);
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "tail read failed");
                self.render_placeholder(surface, config, format!("(log error: {err})"));
            }
        }
    }

    fn render_placeholder<S: TextSurface + ?Sized>(
        &self,
        surface: &mut S,
        config: &LogViewConfig,
        message: String,
    ) {
        self.presenter.render(surface, &vec![message], config);
    }
}

fn file_modified(path: &Path) -> Result<DateTime<Utc>, TailError> {
    let modified = std::fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified))
}
