//! Flags that shape how Janus runs rather than what it scaffolds.
//!
//! Flattened into [`super::Cli`]. `-v` is taken by `--version`, so verbosity
//! is long-only.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for all invocations.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO, twice for DEBUG, three times for TRACE.
    /// Conflicts with `--quiet`.
    #[arg(
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (--verbose, repeat for more)",
        long_help = "Increase logging verbosity:
    (none)              - Only warnings and errors
    --verbose           - Info level (progress messages)
    --verbose --verbose - Debug level (detailed diagnostics)
    three or more       - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Any non-empty `NO_COLOR` other than a falsey word (`0`, `false`, `no`,
    /// `off`) turns this on (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path (default: ~/.janus/config.toml)"
    )]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON output (template listing only).
    Json,
}
