//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a project" or "list templates".

pub mod dependency_installer;
pub mod git_initializer;
pub mod scaffold_service;
pub mod template_service;

pub use dependency_installer::{DependencyInstaller, InstallOutcome};
pub use git_initializer::{DEFAULT_COMMIT_MESSAGE, GitInitializer, GitOutcome, GitStep};
pub use scaffold_service::{ScaffoldReport, ScaffoldRequest, ScaffoldService};
pub use template_service::TemplateService;
