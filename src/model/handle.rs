//! Change-tracking state for the tailed file.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Path plus the last-modified timestamp seen at the last successful render.
///
/// Owned by `RefreshCycle` for the viewer's lifetime. The cached timestamp
/// is what makes repeated refreshes idempotent: a refresh that observes the
/// same timestamp does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileHandle {
    path: PathBuf,
    last_seen_modified: Option<DateTime<Utc>>,
}

impl LogFileHandle {
    /// Create a handle with no observed timestamp, so the first refresh
    /// always reloads.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_seen_modified: None,
        }
    }

    /// The tailed file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Timestamp observed at the last successful render, if any.
    pub fn last_seen_modified(&self) -> Option<DateTime<Utc>> {
        self.last_seen_modified
    }

    /// Record the timestamp of a successfully rendered read.
    pub fn mark_seen(&mut self, modified: DateTime<Utc>) {
        self.last_seen_modified = Some(modified);
    }

    /// Point the handle at a different file.
    ///
    /// Clears the cached timestamp, so the very next refresh reloads even
    /// if the new file's timestamp happens to equal the old one's.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
        self.last_seen_modified = None;
    }
}
