//! Bounded tail reads of a growing log file.
//!
//! Reads only the last `view_size_bytes` of the file (or the whole file in
//! full view), so a multi-megabyte log costs a bounded read per refresh.
//! The file is opened read-only via `File::open`, which never excludes a
//! concurrent appender: Unix has no mandatory sharing, and std's Windows
//! open uses full share flags.

use crate::model::{LineBatch, TailError};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;
use tracing::debug;

/// Read the lines currently in view for `path`.
///
/// With `full_view` the whole file is decoded from offset 0. Otherwise the
/// read starts at `max(0, len - view_size_bytes)` and the first decoded
/// line is discarded, since a mid-file offset almost always lands inside a
/// line and the fragment would render as a half-line.
///
/// A trailing line without a terminating newline (a write in progress) is
/// still included. Returns an empty batch for a zero-length file or when
/// the seek cannot land on the computed offset; the caller substitutes a
/// placeholder in that case.
///
/// # Errors
///
/// Returns [`TailError::FileMissing`] if the file does not exist,
/// [`TailError::Decode`] if a line in the window is not valid UTF-8, and
/// [`TailError::Io`] for open/seek/read failures.
pub fn read_lines(
    path: &Path,
    full_view: bool,
    view_size_bytes: u64,
) -> Result<LineBatch, TailError> {
    if !path.exists() {
        return Err(TailError::FileMissing {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let len = file.metadata()?.len();
    let offset = if full_view {
        0
    } else {
        len.saturating_sub(view_size_bytes)
    };

    let mut reader = BufReader::new(file);
    let landed = reader.seek(SeekFrom::Start(offset))?;
    if landed != offset || offset > len {
        debug!(offset, len, "seek missed tail offset, returning empty batch");
        return Ok(Vec::new());
    }

    let mut lines = Vec::new();
    let mut pos = offset;
    let mut first = true;
    let mut buf = Vec::new();

    loop {
        let line_start = pos;
        let bytes_read = reader.read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            break;
        }
        pos += bytes_read as u64;

        // A bounded view almost certainly starts mid-line; drop the fragment.
        let discard = first && offset > 0;
        first = false;

        let mut raw = std::mem::take(&mut buf);
        if discard {
            continue;
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        let line = String::from_utf8(raw).map_err(|source| TailError::Decode {
            offset: line_start,
            source,
        })?;
        lines.push(line);
    }

    debug!(
        path = %path.display(),
        offset,
        len,
        count = lines.len(),
        "tail read complete"
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    #[test]
    fn missing_file_reports_file_missing() {
        let missing = std::env::temp_dir().join("tailview_nonexistent_98341.log");

        let result = read_lines(&missing, true, 1024);

        assert!(matches!(result, Err(TailError::FileMissing { .. })));
    }

    #[test]
    fn full_view_returns_all_lines_without_phantom_trailing_entry() {
        let path = std::env::temp_dir().join("tailview_full_view.log");
        fs::write(&path, "a\nb\nc\n").unwrap();

        let lines = read_lines(&path, true, 4).unwrap();

        let _ = fs::remove_file(&path);

        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn full_view_keeps_first_line() {
        let path = std::env::temp_dir().join("tailview_full_keeps_first.log");
        fs::write(&path, "first\nsecond\n").unwrap();

        let lines = read_lines(&path, true, 2).unwrap();

        let _ = fs::remove_file(&path);

        assert_eq!(lines[0], "first", "offset 0 must not discard the first line");
    }

    #[test]
    fn bounded_view_discards_truncated_first_line() {
        let path = std::env::temp_dir().join("tailview_bounded_discard.log");
        // 19 bytes total; a 12-byte window starts at offset 7, inside "aaaaXXXX".
        fs::write(&path, "aaaaXXXX\nbbbb\ncccc\n").unwrap();

        let lines = read_lines(&path, false, 12).unwrap();

        let _ = fs::remove_file(&path);

        assert_eq!(lines, vec!["bbbb", "cccc"]);
    }

    #[test]
    fn bounded_view_larger_than_file_keeps_everything() {
        let path = std::env::temp_dir().join("tailview_bounded_large.log");
        fs::write(&path, "one\ntwo\n").unwrap();

        let lines = read_lines(&path, false, 4096).unwrap();

        let _ = fs::remove_file(&path);

        // Window covers the whole file, so the offset is 0 and nothing is
        // discarded.
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn trailing_unterminated_line_is_included() {
        let path = std::env::temp_dir().join("tailview_partial_tail.log");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "done\nin progre").unwrap();
        drop(file);

        let lines = read_lines(&path, true, 1024).unwrap();

        let _ = fs::remove_file(&path);

        assert_eq!(lines, vec!["done", "in progre"]);
    }

    #[test]
    fn empty_file_returns_empty_batch() {
        let path = std::env::temp_dir().join("tailview_empty.log");
        fs::write(&path, "").unwrap();

        let lines = read_lines(&path, false, 1024).unwrap();

        let _ = fs::remove_file(&path);

        assert!(lines.is_empty());
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let path = std::env::temp_dir().join("tailview_crlf.log");
        fs::write(&path, "one\r\ntwo\r\n").unwrap();

        let lines = read_lines(&path, true, 1024).unwrap();

        let _ = fs::remove_file(&path);

        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn invalid_utf8_reports_decode_error_with_offset() {
        let path = std::env::temp_dir().join("tailview_bad_utf8.log");
        fs::write(&path, b"good\n\xFF\xFE bad\n").unwrap();

        let result = read_lines(&path, true, 1024);

        let _ = fs::remove_file(&path);

        match result {
            Err(TailError::Decode { offset, .. }) => {
                assert_eq!(offset, 5, "decode error should point at the bad line's start");
            }
            other => panic!("Expected Decode error, got: {:?}", other),
        }
    }
}
