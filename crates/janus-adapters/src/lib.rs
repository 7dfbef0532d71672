//! Infrastructure adapters for Janus.
//!
//! This crate implements the ports defined in `janus_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemCommandRunner;
pub use template_store::LocalTemplateStore;
