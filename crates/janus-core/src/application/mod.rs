//! Application layer for Janus.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService,
//!   DependencyInstaller, GitInitializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_COMMIT_MESSAGE, DependencyInstaller, GitInitializer, GitOutcome, GitStep,
    InstallOutcome, ScaffoldReport, ScaffoldRequest, ScaffoldService, TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    CommandRunner, Filesystem, ProgressEvent, ProgressReporter, TemplateEntry, TemplateStore,
};

pub use error::ApplicationError;
