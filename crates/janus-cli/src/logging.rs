//! Diagnostic logging for `janus`, written to stderr so it never mixes with
//! the scaffold progress and template listing on stdout.
//!
//! The scaffold, install and git services emit `tracing` events from
//! `janus-core` and `janus-adapters`; this module decides which are shown.
//!
//! # Verbosity mapping
//!
//! | Flag(s)                 | Filter level |
//! |-------------------------|--------------|
//! | (none)                  | WARN         |
//! | `--verbose`             | INFO         |
//! | `--verbose --verbose`   | DEBUG        |
//! | three or more           | TRACE        |
//! | `--quiet`               | ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the derived level.
const CRATES: [&str; 3] = ["janus", "janus_core", "janus_adapters"];

/// Install the stderr subscriber. Called once from `main`, after argument
/// parsing and before configuration is loaded.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `--quiet` wins; otherwise each `--verbose` lowers the threshold one step.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
