//! Template store backed by a directory tree.
//!
//! Layout: `<root>/<domain>/[<subdomain>/]`. Every first-level directory is a
//! domain and every directory directly beneath it is a subdomain.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use janus_core::{
    application::{
        ApplicationError,
        ports::{TemplateEntry, TemplateStore},
    },
    domain::TemplateRef,
    error::JanusResult,
};

/// Reads templates from `root` on the local disk.
#[derive(Debug, Clone)]
pub struct LocalTemplateStore {
    root: PathBuf,
}

impl LocalTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateStore for LocalTemplateStore {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn locate(&self, template: &TemplateRef) -> Option<PathBuf> {
        let path = self.root.join(template.relative_path());
        debug!(template = %template, path = %path.display(), "Locating template");
        path.exists().then_some(path)
    }

    fn list(&self) -> JanusResult<Vec<TemplateEntry>> {
        if !self.root.is_dir() {
            return Err(ApplicationError::TemplateRootMissing {
                path: self.root.clone(),
            }
            .into());
        }

        sorted_subdirs(&self.root)?
            .into_iter()
            .map(|domain| -> JanusResult<TemplateEntry> {
                let variants = sorted_subdirs(&self.root.join(&domain))?;
                Ok(TemplateEntry { domain, variants })
            })
            .collect()
    }
}

/// Names of the visible subdirectories of `dir`, sorted.
fn sorted_subdirs(dir: &Path) -> JanusResult<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| ApplicationError::FilesystemError {
        path: dir.to_path_buf(),
        reason: format!("Failed to read directory: {}", e),
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ApplicationError::FilesystemError {
            path: dir.to_path_buf(),
            reason: format!("Failed to read directory entry: {}", e),
        })?;

        // Follows symlinks, so a linked template directory is listed too.
        if !entry.path().is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) if name.starts_with('.') => {}
            Ok(name) => names.push(name),
            Err(raw) => warn!(name = ?raw, "Skipping non UTF-8 template directory"),
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use janus_core::error::JanusError;
    use tempfile::TempDir;

    fn store_with(dirs: &[&str]) -> (TempDir, LocalTemplateStore) {
        let tmp = TempDir::new().unwrap();
        for dir in dirs {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }
        let store = LocalTemplateStore::new(tmp.path());
        (tmp, store)
    }

    #[test]
    fn locate_finds_domain_and_subdomain() {
        let (tmp, store) = store_with(&["python/flask", "go"]);

        let flask = TemplateRef::new("python", Some("flask")).unwrap();
        assert_eq!(store.locate(&flask), Some(tmp.path().join("python/flask")));

        let go = TemplateRef::new("go", None).unwrap();
        assert_eq!(store.locate(&go), Some(tmp.path().join("go")));
    }

    #[test]
    fn locate_missing_template_is_none() {
        let (_tmp, store) = store_with(&["python/flask"]);
        let django = TemplateRef::new("python", Some("django")).unwrap();
        assert_eq!(store.locate(&django), None);
    }

    #[test]
    fn list_is_sorted_and_skips_files_and_hidden_dirs() {
        let (tmp, store) = store_with(&[
            "web/react",
            "python/flask",
            "python/django",
            "go",
            ".git/objects",
        ]);
        fs::write(tmp.path().join("README.md"), "templates").unwrap();
        fs::write(tmp.path().join("python/notes.txt"), "x").unwrap();

        let entries = store.list().unwrap();
        assert_eq!(
            entries,
            vec![
                TemplateEntry {
                    domain: "go".into(),
                    variants: vec![],
                },
                TemplateEntry {
                    domain: "python".into(),
                    variants: vec!["django".into(), "flask".into()],
                },
                TemplateEntry {
                    domain: "web".into(),
                    variants: vec!["react".into()],
                },
            ]
        );
    }

    #[test]
    fn list_without_root_reports_missing_root() {
        let tmp = TempDir::new().unwrap();
        let store = LocalTemplateStore::new(tmp.path().join("absent"));
        let err = store.list().unwrap_err();
        assert!(matches!(
            err,
            JanusError::Application(ApplicationError::TemplateRootMissing { .. })
        ));
    }
}
