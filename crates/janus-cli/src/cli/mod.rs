//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "janus",
    bin_name = "janus",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Cross-domain project scaffolder",
    long_about = "Janus creates new projects by copying local template directories \
                  from ~/.janus/templates/<domain>/<subdomain>, then installs \
                  dependencies and initialises a git repository.",
    after_help = "EXAMPLES:\n\
        \x20 janus nextjs                 Create nextjs-app from template\n\
        \x20 janus python flask           Create python-flask-app from template\n\
        \x20 janus -o templates           List all local templates\n\
        \x20 janus --completions bash > ~/.local/share/bash-completion/completions/janus",
    disable_version_flag = true,
)]
pub struct Cli {
    /// Flags that apply to every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    #[arg(
        short = 'v',
        long = "version",
        action = ArgAction::Version,
        help = "Print version"
    )]
    version: Option<bool>,

    /// Template domain, e.g. `python`.
    #[arg(value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Template subdomain, e.g. `flask`.
    #[arg(value_name = "SUBDOMAIN", requires = "domain")]
    pub subdomain: Option<String>,

    /// List something instead of scaffolding.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "WHAT",
        value_enum,
        conflicts_with = "domain",
        help = "List local resources (`-o templates`)"
    )]
    pub output: Option<Listing>,

    /// Project name; skips the interactive prompt.
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        requires = "domain",
        help = "Project name (skips the prompt)"
    )]
    pub name: Option<String>,

    #[arg(long = "no-install", help = "Skip dependency installation")]
    pub no_install: bool,

    #[arg(long = "no-git", help = "Skip git initialisation")]
    pub no_git: bool,

    /// Override the templates root.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        env = "JANUS_TEMPLATES_DIR",
        help = "Templates directory (default: ~/.janus/templates)"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Create the templates directory and a default configuration file.
    #[arg(
        long = "init",
        conflicts_with_all = ["domain", "output", "completions"],
        help = "Create ~/.janus/templates and a default config file"
    )]
    pub init: bool,

    /// Print a shell completion script to stdout.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with_all = ["domain", "output"],
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

/// What `-o` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    /// Installed templates.
    Templates,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

/// The single thing an invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Completions(Shell),
    Init,
    ListTemplates,
    Scaffold {
        domain: String,
        subdomain: Option<String>,
    },
}

impl Cli {
    /// Resolve the parsed flags to one action. Conflicts are enforced by clap,
    /// so at most one branch applies.
    pub fn action(&self) -> Action {
        if let Some(shell) = self.completions {
            return Action::Completions(shell);
        }
        if self.init {
            return Action::Init;
        }
        if self.output == Some(Listing::Templates) {
            return Action::ListTemplates;
        }
        match &self.domain {
            Some(domain) => Action::Scaffold {
                domain: domain.clone(),
                subdomain: self.subdomain.clone(),
            },
            None => Action::Help,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
