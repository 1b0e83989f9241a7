//! Loading puzzle input from disk.
//!
//! Input is always read whole before any scan starts, and the scanners only
//! ever see a validated `&str` or [`Grid`]. A missing file maps to
//! [`Error::NotFound`] and invalid UTF-8 to [`Error::Decode`].

use crate::{Error, Grid, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a whole file as UTF-8 text.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| Error::from_io(path, err))?;
    let text = String::from_utf8(bytes).map_err(|_| Error::Decode { path: path.to_path_buf() })?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}

/// Read a file as lines. Trailing blank lines are dropped, blank lines
/// between others are kept.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(text.trim_end_matches(['\n', '\r']).lines().map(str::to_owned).collect())
}

/// Read a file of equal-length lines into a [`Grid`].
///
/// A blank line inside the grid is a [`Error::RaggedGrid`], same as for
/// `str::parse::<Grid>`.
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid> {
    read_text(path)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn reads_text_verbatim() {
        let file = file_with(b"mul(2,4)\ndo()\n");
        assert_eq!(read_text(file.path()).unwrap(), "mul(2,4)\ndo()\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("day3.txt");
        assert!(matches!(read_text(&path), Err(Error::NotFound { .. })));
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let file = file_with(&[b'm', 0xff, 0xfe]);
        assert!(matches!(read_text(file.path()), Err(Error::Decode { .. })));
    }

    #[test]
    fn read_lines_drops_only_trailing_blank_lines() {
        let file = file_with(b"ab\r\n\ncd\n\n");
        assert_eq!(read_lines(file.path()).unwrap(), vec!["ab".to_string(), String::new(), "cd".to_string()]);
    }

    #[test]
    fn read_grid_rejects_blank_line_inside_grid() {
        let file = file_with(b"XMAS\n\nSAMX\n");
        assert!(matches!(read_grid(file.path()), Err(Error::RaggedGrid { row: 1, expected: 4, found: 0 })));
        assert!(matches!("XMAS\n\nSAMX\n".parse::<Grid>(), Err(Error::RaggedGrid { row: 1, .. })));
    }

    #[test]
    fn read_grid_validates_shape() {
        let good = file_with(b"XMAS\nSAMX\n");
        let grid = read_grid(good.path()).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 4));

        let ragged = file_with(b"XMAS\nSAM\n");
        assert!(matches!(read_grid(ragged.path()), Err(Error::RaggedGrid { row: 1, expected: 4, found: 3 })));

        let empty = file_with(b"\n\n");
        assert!(matches!(read_grid(empty.path()), Err(Error::EmptyGrid)));
    }
}
