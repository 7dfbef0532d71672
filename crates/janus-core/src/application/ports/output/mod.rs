//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `janus-adapters` crate provides implementations; the CLI provides the
//! [`ProgressReporter`].

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::application::services::{GitOutcome, InstallOutcome};
use crate::domain::{CommandSpec, Ecosystem, ProjectName, TemplateRef};
use crate::error::JanusResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `janus_adapters::filesystem::LocalFilesystem` (production)
/// - `janus_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Recursively copy the directory `src` to `dst`, preserving permission
    /// bits. Missing parents of `dst` are created.
    ///
    /// Stops at the first failure and leaves whatever was already written in
    /// place; cleaning up is the caller's job.
    fn copy_tree(&self, src: &Path, dst: &Path) -> JanusResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> JanusResult<()>;
}

/// One top-level template domain and the subdomains found beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub domain: String,
    pub variants: Vec<String>,
}

/// Port for locating templates on disk.
///
/// Implemented by:
/// - `janus_adapters::template_store::LocalTemplateStore`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Directory all template references are resolved against.
    fn root(&self) -> PathBuf;

    /// Absolute path of the template directory, if it exists.
    fn locate(&self, template: &TemplateRef) -> Option<PathBuf>;

    /// All template domains, sorted by name.
    fn list(&self) -> JanusResult<Vec<TemplateEntry>>;
}

/// Port for running external programs (package managers, git).
///
/// Implemented by:
/// - `janus_adapters::process::SystemCommandRunner`
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Whether `program` can be found on the search path.
    fn is_available(&self, program: &str) -> bool;

    /// Run `command` to completion with `dir` as working directory.
    ///
    /// Standard streams are inherited. A spawn failure or a non-zero exit is
    /// an error.
    fn run(&self, dir: &Path, command: &CommandSpec) -> JanusResult<()>;
}

/// Something that happened while scaffolding, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    CopyStarted {
        project: ProjectName,
        template: TemplateRef,
    },
    CopyFinished {
        project_dir: PathBuf,
    },
    InstallStarted {
        marker: &'static str,
        ecosystem: Ecosystem,
    },
    InstallRetrying {
        command: CommandSpec,
    },
    InstallFinished(InstallOutcome),
    GitStarted,
    GitInitialized,
    GitCommitting,
    GitFinished(GitOutcome),
}

/// Port for surfacing progress to the user while a scaffold runs.
pub trait ProgressReporter {
    fn report(&self, event: ProgressEvent);
}
