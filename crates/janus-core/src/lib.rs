//! Janus Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Janus
//! project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            janus-cli (CLI)              │
//! │   (prompting, output, configuration)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, DependencyInstaller, │
//! │   GitInitializer, TemplateService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, TemplateStore, Commands)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    janus-adapters (Infrastructure)      │
//! │ (LocalFilesystem, LocalTemplateStore,   │
//! │  SystemCommandRunner)                   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use janus_core::{
//!     application::{ScaffoldRequest, ScaffoldService},
//!     domain::{ProjectName, TemplateRef},
//! };
//!
//! # fn demo(service: ScaffoldService, reporter: &dyn janus_core::application::ProgressReporter) {
//! let template = TemplateRef::new("python", Some("flask")).unwrap();
//! let request = ScaffoldRequest::new(template, ProjectName::sanitize("My App"));
//! let report = service.scaffold(&request, reporter).unwrap();
//! println!("created {}", report.project_dir.display());
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CommandRunner, Filesystem, ProgressEvent, ProgressReporter, ScaffoldReport,
        ScaffoldRequest, ScaffoldService, TemplateEntry, TemplateService, TemplateStore,
    };
    pub use crate::domain::{NextStep, ProjectName, TemplateRef};
    pub use crate::error::{JanusError, JanusResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
