//! Template store adapters.

mod local;

pub use local::LocalTemplateStore;
