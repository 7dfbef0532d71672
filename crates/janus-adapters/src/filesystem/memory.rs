//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use janus_core::{
    application::{ApplicationError, ports::Filesystem},
    error::JanusResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree. A path registered with
/// [`MemoryFilesystem::fail_on`] makes any copy that would write it fail
/// after everything sorted before it has been written, which is enough to
/// exercise partial-copy rollback.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    fail_on: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut inner = self.write();
        if let Some(parent) = path.parent() {
            inner.insert_dir_all(parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Add an (empty) directory and its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.write().insert_dir_all(path.as_ref());
    }

    /// Make any copy that writes `path` fail.
    pub fn fail_on(&self, path: impl AsRef<Path>) {
        self.write().fail_on.insert(path.as_ref().to_path_buf());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.read().files.get(path).cloned()
    }

    /// Check whether `path` is a known directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MemoryFilesystemInner {
    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn check_writable(&self, path: &Path) -> JanusResult<()> {
        if self.fail_on.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> JanusResult<()> {
        let mut inner = self.write();

        if !inner.directories.contains(src) {
            return Err(if inner.files.contains_key(src) {
                ApplicationError::NotADirectory {
                    path: src.to_path_buf(),
                }
            } else {
                ApplicationError::FilesystemError {
                    path: src.to_path_buf(),
                    reason: "No such file or directory".into(),
                }
            }
            .into());
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(src).ok().map(|rel| dst.join(rel)))
            .collect();
        let files: Vec<(PathBuf, Vec<u8>)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| p.strip_prefix(src).ok().map(|rel| (dst.join(rel), c.clone())))
            .collect();

        inner.check_writable(dst)?;
        inner.insert_dir_all(dst);
        for dir in dirs {
            inner.check_writable(&dir)?;
            inner.insert_dir_all(&dir);
        }
        for (path, content) in files {
            inner.check_writable(&path)?;
            inner.files.insert(path, content);
        }

        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> JanusResult<()> {
        let mut inner = self.write();
        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_tree_mirrors_files_and_empty_dirs() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/python/flask/app.py", "print()");
        fs.add_dir("/t/python/flask/static");

        fs.copy_tree(Path::new("/t/python/flask"), Path::new("/w/app"))
            .unwrap();

        assert_eq!(
            fs.read_file(Path::new("/w/app/app.py")).as_deref(),
            Some(&b"print()"[..])
        );
        assert!(fs.is_dir(Path::new("/w/app/static")));
    }

    #[test]
    fn copy_of_a_file_is_rejected() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/readme", "x");
        let err = fs
            .copy_tree(Path::new("/t/readme"), Path::new("/w/app"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Source is not a directory"));
        assert!(!fs.exists(Path::new("/w/app")));
    }

    #[test]
    fn injected_failure_leaves_partial_copy() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/a.txt", "a");
        fs.add_file("/t/b.txt", "b");
        fs.fail_on("/w/app/b.txt");

        assert!(fs.copy_tree(Path::new("/t"), Path::new("/w/app")).is_err());
        assert!(fs.exists(Path::new("/w/app/a.txt")));
        assert!(!fs.exists(Path::new("/w/app/b.txt")));

        fs.remove_dir_all(Path::new("/w/app")).unwrap();
        assert!(!fs.exists(Path::new("/w/app")));
        assert!(fs.exists(Path::new("/t/b.txt")));
    }
}
