//! External command adapters.

mod system;

pub use system::SystemCommandRunner;
