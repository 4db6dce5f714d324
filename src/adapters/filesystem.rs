// src/adapters/filesystem.rs
// File system adapters: the real disk and an in-memory stand-in for tests

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::ports::filesystem::{FileSystem, FileSystemError};

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
        fs::write(path, contents).map_err(|e| FileSystemError::from_io(path, e))
    }

    fn replace_file(&self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let permissions = fs::metadata(path)
            .map_err(|e| FileSystemError::from_io(path, e))?
            .permissions();

        let mut temp =
            NamedTempFile::new_in(parent).map_err(|e| FileSystemError::from_io(parent, e))?;
        temp.write_all(contents.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.as_file().set_permissions(permissions)?;

        temp.persist(path)
            .map(|_| ())
            .map_err(|e| FileSystemError::from_io(path, e.error))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        let entries = fs::read_dir(path).map_err(|e| FileSystemError::from_io(path, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(FileSystemError::IoError)?;
            paths.push(entry.path());
        }
        paths.sort();

        Ok(paths)
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
        if !root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                FileSystemError::from_io(&path, io::Error::from(e))
            })?;

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

pub mod memory {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    /// In-memory file system. Adding a file registers all of its ancestors as directories.
    #[derive(Default)]
    pub struct MemoryFileSystem {
        files: RefCell<BTreeMap<PathBuf, String>>,
        directories: RefCell<BTreeSet<PathBuf>>,
        read_only: RefCell<BTreeSet<PathBuf>>,
        writes: RefCell<Vec<PathBuf>>,
    }

    impl MemoryFileSystem {
        pub fn add_file(&self, path: &Path, content: &str) {
            if let Some(parent) = path.parent() {
                self.add_directory(parent);
            }
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), content.to_string());
        }

        pub fn add_directory(&self, path: &Path) {
            let mut directories = self.directories.borrow_mut();
            for ancestor in path.ancestors() {
                if ancestor.as_os_str().is_empty() {
                    continue;
                }
                directories.insert(ancestor.to_path_buf());
            }
        }

        /// Make writes to `path` fail with `PermissionDenied`
        pub fn set_read_only(&self, path: &Path) {
            self.read_only.borrow_mut().insert(path.to_path_buf());
        }

        /// Current content of a file, if present
        pub fn content(&self, path: &Path) -> Option<String> {
            self.files.borrow().get(path).cloned()
        }

        /// Paths written so far, in order
        pub fn writes(&self) -> Vec<PathBuf> {
            self.writes.borrow().clone()
        }

        fn store(&self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
            if self.read_only.borrow().contains(path) {
                return Err(FileSystemError::PermissionDenied(
                    path.to_string_lossy().to_string(),
                ));
            }
            let mut files = self.files.borrow_mut();
            match files.get_mut(path) {
                Some(existing) => *existing = contents.to_string(),
                None => {
                    return Err(FileSystemError::PathNotFound(
                        path.to_string_lossy().to_string(),
                    ))
                }
            }
            self.writes.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    impl FileSystem for MemoryFileSystem {
        fn read_file(&self, path: &Path) -> Result<String, FileSystemError> {
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| FileSystemError::PathNotFound(path.to_string_lossy().to_string()))
        }

        fn write_file(&self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
            self.store(path, contents)
        }

        fn replace_file(&self, path: &Path, contents: &str) -> Result<(), FileSystemError> {
            self.store(path, contents)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.directories.borrow().contains(path)
        }

        fn list_directory(&self, path: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
            if !self.is_dir(path) {
                return Err(FileSystemError::PathNotFound(
                    path.to_string_lossy().to_string(),
                ));
            }

            let files = self.files.borrow();
            let directories = self.directories.borrow();
            let children: BTreeSet<PathBuf> = files
                .keys()
                .chain(directories.iter())
                .filter(|p| p.parent() == Some(path))
                .cloned()
                .collect();

            Ok(children.into_iter().collect())
        }

        fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, FileSystemError> {
            Ok(self
                .files
                .borrow()
                .keys()
                .filter(|p| p.starts_with(root))
                .cloned()
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryFileSystem;
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_is_dir() {
        let fs = RealFileSystem;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("FooTest.php");

        assert!(!fs.is_dir(&dir.path().join("missing")));

        File::create(&file_path).unwrap();

        assert!(!fs.is_dir(&file_path));
        assert!(fs.is_dir(dir.path()));
    }

    #[test]
    fn test_list_directory() {
        let fs = RealFileSystem;

        let dir = tempdir().unwrap();
        let file1 = dir.path().join("ATest.php");
        let file2 = dir.path().join("BTest.php");

        File::create(&file1).unwrap();
        File::create(&file2).unwrap();

        let paths = fs.list_directory(dir.path()).unwrap();

        assert_eq!(paths, vec![file1, file2]);
    }

    #[test]
    fn test_walk_files_recurses_and_skips_directories() {
        let fs = RealFileSystem;

        let dir = tempdir().unwrap();
        let nested = dir.path().join("TestCase").join("Model");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("bootstrap.php"), "<?php").unwrap();
        std::fs::write(nested.join("UserTest.php"), "<?php").unwrap();

        let files = fs.walk_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![dir.path().join("TestCase/Model/UserTest.php"), dir.path().join("bootstrap.php")]
        );
    }

    #[test]
    fn test_walk_files_missing_root_is_empty() {
        let fs = RealFileSystem;
        let dir = tempdir().unwrap();

        let files = fs.walk_files(&dir.path().join("missing")).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_write_and_read_round_trip() {
        let fs = RealFileSystem;
        let dir = tempdir().unwrap();
        let path = dir.path().join("FooTest.php");
        std::fs::write(&path, "before").unwrap();

        fs.write_file(&path, "after").unwrap();

        assert_eq!(fs.read_file(&path).unwrap(), "after");
    }

    #[test]
    fn test_replace_file_swaps_content() {
        let fs = RealFileSystem;
        let dir = tempdir().unwrap();
        let path = dir.path().join("FooTest.php");
        std::fs::write(&path, "before").unwrap();

        fs.replace_file(&path, "after").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "after");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_replace_file_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let fs = RealFileSystem;
        let dir = tempdir().unwrap();
        let path = dir.path().join("FooTest.php");
        std::fs::write(&path, "before").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        fs.replace_file(&path, "after").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_read_missing_file_is_path_not_found() {
        let fs = RealFileSystem;
        let dir = tempdir().unwrap();

        assert!(matches!(
            fs.read_file(&dir.path().join("nope.php")),
            Err(FileSystemError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_memory_file_system() {
        let fs = MemoryFileSystem::default();
        fs.add_file(Path::new("/p/tests/TestCase/ATest.php"), "a");
        fs.add_directory(Path::new("/p/plugins/Empty"));

        assert!(fs.is_dir(Path::new("/p/tests/TestCase")));
        assert!(fs.is_dir(Path::new("/p")));
        assert!(!fs.is_dir(Path::new("/p/tests/TestCase/ATest.php")));
        assert_eq!(fs.read_file(Path::new("/p/tests/TestCase/ATest.php")).unwrap(), "a");
        assert_eq!(
            fs.list_directory(Path::new("/p")).unwrap(),
            vec![PathBuf::from("/p/plugins"), PathBuf::from("/p/tests")]
        );
        assert_eq!(
            fs.walk_files(Path::new("/p/tests")).unwrap(),
            vec![PathBuf::from("/p/tests/TestCase/ATest.php")]
        );
        assert!(fs.walk_files(Path::new("/p/plugins")).unwrap().is_empty());

        fs.write_file(Path::new("/p/tests/TestCase/ATest.php"), "b").unwrap();
        assert_eq!(
            fs.content(Path::new("/p/tests/TestCase/ATest.php")).as_deref(),
            Some("b")
        );
        assert_eq!(fs.writes(), vec![PathBuf::from("/p/tests/TestCase/ATest.php")]);
    }

    #[test]
    fn test_memory_file_system_errors() {
        let fs = MemoryFileSystem::default();
        fs.add_file(Path::new("/p/tests/ATest.php"), "a");
        fs.set_read_only(Path::new("/p/tests/ATest.php"));

        assert!(matches!(
            fs.read_file(Path::new("/p/tests/missing.php")),
            Err(FileSystemError::PathNotFound(_))
        ));
        assert!(matches!(
            fs.write_file(Path::new("/p/tests/ATest.php"), "b"),
            Err(FileSystemError::PermissionDenied(_))
        ));
        assert!(fs.writes().is_empty());
    }
}
