//! Crate error type.
//!
//! Malformed text in corrupted memory is never an error: the lexer simply
//! skips it. Errors only come from loading input and from building a grid or
//! search pattern that violates its preconditions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("input file is not valid UTF-8: {}", path.display())]
    Decode { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid grid: no cells")]
    EmptyGrid,

    #[error("invalid grid: row {row} has {found} columns, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },

    #[error("search word must not be empty")]
    EmptyWord,

    #[error("cross pattern word must have exactly 3 characters, got {len}")]
    CrossWord { len: usize },
}

impl Error {
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path },
            _ => Error::Io { path, source },
        }
    }
}
