// src/ports/filesystem.rs
// File system port (interface)

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file system operations
#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

impl FileSystemError {
    /// Classify an `io::Error` raised while working on `path`
    pub fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound(path.to_string_lossy().to_string()),
            io::ErrorKind::PermissionDenied => {
                Self::PermissionDenied(path.to_string_lossy().to_string())
            }
            _ => Self::IoError(error),
        }
    }
}

/// Port for file system operations
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Read a whole file as a string
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError>;

    /// Overwrite a whole file in place
    fn write_file(&self, path: &Path, contents: &str) -> Result<(), FileSystemError>;

    /// Replace a file by writing a sibling temporary file and renaming it over the original
    fn replace_file(&self, path: &Path, contents: &str) -> Result<(), FileSystemError>;

    /// Check if a path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// List the immediate children of a directory
    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError>;

    /// All regular files below `root`, recursively
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, FileSystemError>;
}

// Implement FileSystem for references to implement FileSystem
impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError> {
        (*self).read_file(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
        (*self).write_file(path, contents)
    }

    fn replace_file(&self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
        (*self).replace_file(path, contents)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (*self).is_dir(path)
    }

    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        (*self).list_directory(path)
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        (*self).walk_files(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_kinds() {
        let path = Path::new("/tests/FooTest.php");

        assert!(matches!(
            FileSystemError::from_io(path, io::Error::from(io::ErrorKind::NotFound)),
            FileSystemError::PathNotFound(p) if p == "/tests/FooTest.php"
        ));
        assert!(matches!(
            FileSystemError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied)),
            FileSystemError::PermissionDenied(_)
        ));
        assert!(matches!(
            FileSystemError::from_io(path, io::Error::from(io::ErrorKind::InvalidData)),
            FileSystemError::IoError(_)
        ));
    }

    #[test]
    fn test_reference_forwards_to_mock() {
        let mut fs = MockFileSystem::new();
        fs.expect_is_dir()
            .withf(|p| p == Path::new("/project/tests"))
            .return_const(true);

        let fs_ref = &fs;
        assert!(fs_ref.is_dir(Path::new("/project/tests")));
    }
}
