//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `janus-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Tree copy and cleanup
//!   - `TemplateStore`: Template lookup and listing
//!   - `CommandRunner`: Package managers and git
//!   - `ProgressReporter`: Progress output (implemented by the CLI)

pub mod output;

pub use output::{
    CommandRunner, Filesystem, ProgressEvent, ProgressReporter, TemplateEntry, TemplateStore,
};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem, MockTemplateStore};
