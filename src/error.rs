//! Error taxonomy for the editor boundary (arguments, loading, saving).
//!
//! Unrecognised keys are not errors; they are dropped during key
//! classification and never reach this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal and reportable errors
#[derive(Debug, Error)]
pub enum HexError {
    #[error("{0}")]
    Usage(String),

    #[error("Error opening file {}: file not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Error opening file {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error opening file {}: file is empty", .0.display())]
    EmptyFile(PathBuf),

    #[error("Error saving file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HexError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HexError::Usage(_) => 1,
            HexError::FileNotFound(_)
            | HexError::FileUnreadable { .. }
            | HexError::EmptyFile(_) => 2,
            // Reserved: the editor reports save failures in the status line and keeps running
            HexError::Save { .. } => 3,
        }
    }

    /// Classify an I/O failure raised while reading `path`
    pub fn from_load(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            HexError::FileNotFound(path)
        } else {
            HexError::FileUnreadable { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_and_file_errors_should_have_distinct_exit_codes() {
        let usage = HexError::Usage("Usage: hexitor <FILE>".to_string());
        let missing = HexError::FileNotFound(PathBuf::from("nope.bin"));
        let empty = HexError::EmptyFile(PathBuf::from("empty.bin"));

        assert_eq!(usage.exit_code(), 1);
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(empty.exit_code(), 2);
        assert_ne!(usage.exit_code(), missing.exit_code());
    }

    #[test]
    fn from_load_should_separate_missing_from_unreadable() {
        let missing = HexError::from_load(
            PathBuf::from("a.bin"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(missing, HexError::FileNotFound(_)));

        let denied = HexError::from_load(
            PathBuf::from("b.bin"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(denied, HexError::FileUnreadable { .. }));
        assert!(denied.to_string().contains("b.bin"));
    }

    #[test]
    fn empty_file_message_should_name_the_file() {
        let err = HexError::EmptyFile(PathBuf::from("zero.bin"));
        assert_eq!(err.to_string(), "Error opening file zero.bin: file is empty");
    }
}
