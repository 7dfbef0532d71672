//! Core domain layer for Janus.
//!
//! This module contains pure logic with no I/O. Filesystem access and
//! process spawning are reached through the ports defined in the
//! application layer.
//!
//! ## Contents
//!
//! - **Value objects**: [`TemplateRef`], [`ProjectName`]
//! - **Dependency registry**: ordered marker-file → install-command rules
//! - **Next steps**: the closing hint chosen from the template name
pub mod dependencies;
pub mod error;
pub mod next_steps;
pub mod value_objects;

// Re-exports for convenience
pub use dependencies::{CommandSpec, Ecosystem, INSTALL_RULES, InstallRule, StaticCommand};
pub use error::DomainError;
pub use next_steps::NextStep;
pub use value_objects::{FALLBACK_PROJECT_NAME, ProjectName, TemplateRef};
