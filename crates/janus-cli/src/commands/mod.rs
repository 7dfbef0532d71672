//! Command handlers. Each one turns parsed flags into calls on the core
//! services and renders the result.

use std::path::PathBuf;

use tracing::debug;

use crate::{cli::Cli, config::AppConfig, error::CliResult};

pub mod completions;
pub mod init;
pub mod list;
pub mod new;

/// Templates root: `--templates-dir` / `JANUS_TEMPLATES_DIR`, then
/// `templates.root` from config, then `~/.janus/templates`.
pub fn templates_root(cli: &Cli, config: &AppConfig) -> CliResult<PathBuf> {
    let root = match &cli.templates_dir {
        Some(dir) => dir.clone(),
        None => config.templates_root()?,
    };
    debug!(root = %root.display(), "Resolved templates root");
    Ok(root)
}
