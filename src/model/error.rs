//! Error types for the tailing reader.
//!
//! All variants are non-fatal at the viewer level: `RefreshCycle` catches
//! them and renders a placeholder line instead of propagating. The taxonomy
//! exists so the reader can report *why* it failed and so tests can match
//! on the failure mode.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Failures while opening or reading the tailed log file.
///
/// `FileMissing` is distinguished from `Io` because the viewer shows a
/// different placeholder for it ("file not found" vs the error text), and
/// because a missing file is checked for before opening rather than
/// discovered as an open error.
#[derive(Debug, Error)]
pub enum TailError {
    /// The log file does not exist at refresh time.
    #[error("File not found: {path}")]
    FileMissing {
        /// Path that was checked.
        path: PathBuf,
    },

    /// A line in the read window was not valid UTF-8.
    ///
    /// Treated like an I/O failure for recovery purposes: placeholder
    /// render, retry on the next changed refresh.
    #[error("Invalid UTF-8 at byte offset {offset}: {source}")]
    Decode {
        /// Byte offset of the start of the offending line.
        offset: u64,
        /// The underlying decode error.
        #[source]
        source: FromUtf8Error,
    },

    /// Open/seek/read failure, including the file disappearing between the
    /// existence check and the open.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn file_missing_display_includes_path() {
        let err = TailError::FileMissing {
            path: PathBuf::from("/tmp/missing.log"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.log"));
    }

    #[test]
    fn io_error_converts_and_preserves_message() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: TailError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn decode_error_display_includes_offset() {
        let bad = String::from_utf8(vec![0x66, 0xFF]).unwrap_err();
        let err = TailError::Decode {
            offset: 128,
            source: bad,
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid UTF-8"));
        assert!(msg.contains("128"));
    }
}
