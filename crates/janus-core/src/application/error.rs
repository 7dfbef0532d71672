//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not input
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No directory exists for the requested template.
    #[error("Template '{template}' not found at: {}", path.display())]
    TemplateNotFound { template: String, path: PathBuf },

    /// The templates root itself is missing.
    #[error("No templates directory found at: {}", path.display())]
    TemplateRootMissing { path: PathBuf },

    /// Project already exists at target location.
    #[error("Directory '{}' already exists", path.display())]
    ProjectExists { path: PathBuf },

    /// A copy source was expected to be a directory.
    #[error("Source is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("`{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path, .. } => vec![
                format!("Create the template directory: {}", path.display()),
                "List the installed templates: janus -o templates".into(),
            ],
            Self::TemplateRootMissing { path } => vec![
                format!("Create the directory: mkdir -p {}", path.display()),
                "Or run `janus --init` to create it with a default configuration".into(),
            ],
            Self::ProjectExists { path } => vec![
                "Aborting to avoid overwriting existing files".into(),
                "Choose a different project name".into(),
                format!("Remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::NotADirectory { path } => vec![format!(
                "Templates must be directories; '{}' is a file",
                path.display()
            )],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
            Self::CommandFailed { .. } => vec![
                "Ensure the command is installed and in your PATH".into(),
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::TemplateRootMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::ProjectExists { .. } | Self::NotADirectory { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::CommandFailed { .. } => ErrorCategory::Internal,
        }
    }
}
