//! `janus --init`: create the templates root and a default configuration
//! file. Existing files are left alone.

use std::fs;
use std::path::Path;

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Create `templates_root` and, unless one exists, the config file at
/// `config_path`.
pub fn execute(templates_root: &Path, config_path: &Path, output: &OutputManager) -> CliResult<()> {
    output.info("Initialising Janus...")?;

    if templates_root.is_dir() {
        output.info(&format!(
            "Templates directory already exists at {}",
            templates_root.display()
        ))?;
    } else {
        fs::create_dir_all(templates_root).with_cli_context(|| {
            format!(
                "Failed to create templates directory '{}'",
                templates_root.display()
            )
        })?;
        output.success(&format!(
            "Templates directory created at {}",
            templates_root.display()
        ))?;
    }

    if config_path.exists() {
        output.warning(&format!(
            "Config already exists at {}, leaving it unchanged",
            config_path.display(),
        ))?;
    } else {
        write_default_config(config_path)?;
        output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?;
    }

    output.info(&format!(
        "Add templates as {}/<domain>/<subdomain>/",
        templates_root.display()
    ))?;
    Ok(())
}

fn write_default_config(config_path: &Path) -> CliResult<()> {
    let toml = AppConfig::default().to_toml()?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    fs::write(config_path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))
}
