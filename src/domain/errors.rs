// src/domain/errors.rs
// Errors that stop a sweep

use std::path::PathBuf;
use thiserror::Error;

use crate::ports::filesystem::FileSystemError;

/// A sweep fails fast: the first read, write or traversal error ends the run.
/// Files written before the failure stay written.
#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Failed to scan {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: FileSystemError,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: FileSystemError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: FileSystemError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path_and_cause() {
        let error = SweepError::Read {
            path: PathBuf::from("/project/tests/FooTest.php"),
            source: FileSystemError::PermissionDenied("/project/tests/FooTest.php".to_string()),
        };

        assert_eq!(
            error.to_string(),
            "Failed to read /project/tests/FooTest.php: \
             Permission denied: /project/tests/FooTest.php"
        );
    }
}
