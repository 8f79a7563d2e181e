//! Error types for tagforge
//!
//! Building and rendering a tree never fails. The only fallible step is
//! persisting a rendered document, plus whatever the caller's own
//! population logic reports through [`Document::try_build`].
//!
//! [`Document::try_build`]: crate::Document::try_build

use std::{io, path::PathBuf};
use thiserror::Error;

/// Main error type for tagforge
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the rendered document to its output target failed
    #[error("cannot write to file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The caller's population callback failed; the document was still written
    #[error("document population failed: {0}")]
    Populate(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error came from the persistence step
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias for tagforge
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = Error::io(
            "/nope/out.html",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let display = err.to_string();
        assert!(display.contains("cannot write to file"));
        assert!(display.contains("/nope/out.html"));
        assert!(err.is_io());
    }

    #[test]
    fn test_populate_error_keeps_source() {
        let inner = io::Error::other("callback broke");
        let err = Error::Populate(Box::new(inner));
        assert!(!err.is_io());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "document population failed: callback broke");
    }
}
