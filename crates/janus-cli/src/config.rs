//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables `JANUS__<SECTION>__<KEY>`, e.g.
//!    `JANUS__SCAFFOLD__INIT_GIT=false`
//! 3. Config file (`--config`, else `~/.janus/config.toml` if present)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use janus_core::application::DEFAULT_COMMIT_MESSAGE;

use crate::error::{CliError, CliResult};

/// Directory under the home directory that holds templates and config.
pub const JANUS_DIR_NAME: &str = ".janus";
pub const TEMPLATES_DIR_NAME: &str = "templates";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub templates: TemplatesConfig,
    pub scaffold: ScaffoldConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Templates root; `~/.janus/templates` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub install_dependencies: bool,
    pub init_git: bool,
    pub commit_message: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            install_dependencies: true,
            init_git: true,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from `config_file`, or from the default location
    /// when `None`. An explicitly named file must exist; the default one is
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::load_from(Some(path), true),
            None => {
                let default = janus_dir().ok().map(|dir| dir.join(CONFIG_FILE_NAME));
                Self::load_from(default.as_deref(), false)
            }
        }
    }

    fn load_from(file: Option<&Path>, required: bool) -> CliResult<Self> {
        let defaults = Config::try_from(&AppConfig::default())
            .map_err(|e| config_error("Failed to build default configuration", e))?;

        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = file {
            debug!(path = %path.display(), required, "Reading config file");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }
        builder = builder.add_source(
            Environment::with_prefix("JANUS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|settings| settings.try_deserialize::<AppConfig>())
            .map_err(|e| config_error("Failed to load configuration", e))
    }

    /// Resolved templates root.
    pub fn templates_root(&self) -> CliResult<PathBuf> {
        match &self.templates.root {
            Some(root) => Ok(root.clone()),
            None => Ok(janus_dir()?.join(TEMPLATES_DIR_NAME)),
        }
    }

    /// Path of the default configuration file.
    pub fn default_path() -> CliResult<PathBuf> {
        Ok(janus_dir()?.join(CONFIG_FILE_NAME))
    }

    /// TOML rendering used when writing a fresh config file.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| config_error("Failed to serialise configuration", e))
    }
}

/// `~/.janus`.
pub fn janus_dir() -> CliResult<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(JANUS_DIR_NAME))
        .ok_or(CliError::HomeDirUnavailable)
}

fn config_error(message: &str, e: impl std::error::Error + Send + Sync + 'static) -> CliError {
    CliError::ConfigError {
        message: format!("{message}: {e}"),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_enable_install_and_git() {
        let cfg = AppConfig::default();
        assert!(cfg.scaffold.install_dependencies);
        assert!(cfg.scaffold.init_git);
        assert_eq!(cfg.scaffold.commit_message, "Initial commit from Janus");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.templates.root, None);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(Some(&tmp.path().join("absent.toml")), false).unwrap();
        assert_eq!(cfg.scaffold, ScaffoldConfig::default());
    }

    #[test]
    fn missing_required_file_is_a_config_error() {
        let tmp = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&tmp.path().join("absent.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn file_values_override_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "[templates]\nroot = \"/srv/templates\"\n\n[scaffold]\ninit_git = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.templates.root, Some(PathBuf::from("/srv/templates")));
        assert!(!cfg.scaffold.init_git);
        assert!(cfg.scaffold.install_dependencies);
        assert_eq!(
            cfg.templates_root().unwrap(),
            PathBuf::from("/srv/templates")
        );
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[scaffold\ninit_git = ").unwrap();
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn written_defaults_load_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }
}
