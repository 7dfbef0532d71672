//! Local filesystem adapter using std::fs.
//!
//! # Copy semantics
//!
//! [`LocalFilesystem::copy_tree`] walks the source depth-first with
//! `walkdir` in contents-first order, so every directory receives its
//! permission bits only after its children have been written. A template
//! containing a read-only directory therefore copies cleanly.
//!
//! File contents are copied byte-for-byte and the source permission bits are
//! re-applied afterwards. Ownership and extended attributes are not copied.
//!
//! Symlinks are recreated as symlinks with the same target on Unix. On other
//! platforms they are followed and their target is copied.
//!
//! [`Filesystem::remove_dir_all`] first restores owner access on every
//! directory in the tree, so a copied read-only directory does not block the
//! rollback of a failed scaffold.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, trace};
use walkdir::WalkDir;

use janus_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{JanusError, JanusResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the name.
        fs::symlink_metadata(path).is_ok()
    }

    fn copy_tree(&self, src: &Path, dst: &Path) -> JanusResult<()> {
        copy_tree(src, dst)
    }

    fn remove_dir_all(&self, path: &Path) -> JanusResult<()> {
        unlock_directories(path);
        fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

/// Recursively copy `src` into `dst`, creating `dst` and any missing parents.
pub fn copy_tree(src: &Path, dst: &Path) -> JanusResult<()> {
    let metadata = fs::metadata(src).map_err(|e| map_io_error(src, e, "read metadata"))?;
    if !metadata.is_dir() {
        return Err(ApplicationError::NotADirectory {
            path: src.to_path_buf(),
        }
        .into());
    }

    fs::create_dir_all(dst).map_err(|e| map_io_error(dst, e, "create directory"))?;
    debug!(src = %src.display(), dst = %dst.display(), "Copying tree");

    for entry in WalkDir::new(src).follow_links(false).contents_first(true) {
        let entry = entry.map_err(|e| map_walk_error(src, e))?;
        let relative = entry.path().strip_prefix(src).map_err(|_| {
            ApplicationError::FilesystemError {
                path: entry.path().to_path_buf(),
                reason: format!("entry is outside of {}", src.display()),
            }
        })?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| map_io_error(&target, e, "create directory"))?;
            copy_permissions(entry.path(), &target)?;
        } else if file_type.is_symlink() {
            ensure_parent(&target)?;
            copy_symlink(entry.path(), &target)?;
        } else {
            ensure_parent(&target)?;
            copy_file(entry.path(), &target)?;
        }
        trace!(path = %relative.display(), "Copied");
    }

    Ok(())
}

fn copy_file(src: &Path, dst: &Path) -> JanusResult<()> {
    fs::copy(src, dst).map_err(|e| map_io_error(src, e, "copy file"))?;
    copy_permissions(src, dst)
}

fn copy_permissions(src: &Path, dst: &Path) -> JanusResult<()> {
    let permissions = fs::metadata(src)
        .map_err(|e| map_io_error(src, e, "read metadata"))?
        .permissions();
    fs::set_permissions(dst, permissions).map_err(|e| map_io_error(dst, e, "set permissions"))
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> JanusResult<()> {
    let link_target = fs::read_link(src).map_err(|e| map_io_error(src, e, "read symlink"))?;
    std::os::unix::fs::symlink(&link_target, dst)
        .map_err(|e| map_io_error(dst, e, "create symlink"))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> JanusResult<()> {
    if fs::metadata(src)
        .map_err(|e| map_io_error(src, e, "read metadata"))?
        .is_dir()
    {
        copy_tree(src, dst)
    } else {
        copy_file(src, dst)
    }
}

/// Give the owner full access to every directory under `root`. Failures are
/// left for the removal itself to report.
#[cfg(unix)]
fn unlock_directories(root: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let dirs = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_dir());

    for entry in dirs {
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let mut permissions = metadata.permissions();
        let mode = permissions.mode();
        if mode & 0o700 == 0o700 {
            continue;
        }
        permissions.set_mode(mode | 0o700);
        if let Err(e) = fs::set_permissions(entry.path(), permissions) {
            debug!(path = %entry.path().display(), error = %e, "Could not unlock directory");
        }
    }
}

#[cfg(not(unix))]
fn unlock_directories(_root: &Path) {}

fn ensure_parent(path: &Path) -> JanusResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| map_io_error(parent, e, "create directory")),
        _ => Ok(()),
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> JanusError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> JanusError {
    ApplicationError::FilesystemError {
        path: e.path().unwrap_or(root).to_path_buf(),
        reason: format!("Failed to read directory: {}", e),
    }
    .into()
}
