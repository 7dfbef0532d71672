//! Dependency-manager registry.
//!
//! A scaffolded project belongs to at most one package ecosystem. Detection
//! walks [`INSTALL_RULES`] in order and stops at the first rule whose marker
//! file exists in the project root, so a project carrying both
//! `package.json` and `requirements.txt` is treated as an npm project.
//!
//! # Adding a New Ecosystem
//!
//! 1. Add a variant to [`Ecosystem`]
//! 2. Add one [`InstallRule`] to [`INSTALL_RULES`] at the right priority
//! 3. The installer service derives everything else from the table

use std::fmt;

// ── Commands ─────────────────────────────────────────────────────────────────

/// A command line known at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl StaticCommand {
    pub fn to_spec(&self) -> CommandSpec {
        CommandSpec::new(self.program, self.args.iter().copied())
    }
}

/// An owned command line: program plus arguments, run in a working directory
/// chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

// ── Ecosystems ───────────────────────────────────────────────────────────────

/// A package ecosystem Janus knows how to install dependencies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Npm,
    Pip,
    Go,
    Cargo,
}

impl Ecosystem {
    /// Human-facing label used in progress messages ("Installing Go dependencies").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pip => "pip",
            Self::Go => "Go",
            Self::Cargo => "Rust",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Rules ────────────────────────────────────────────────────────────────────

/// One row of the detection table.
#[derive(Debug, Clone, Copy)]
pub struct InstallRule {
    /// File whose presence in the project root selects this rule.
    pub marker: &'static str,

    pub ecosystem: Ecosystem,

    /// Command run with the project root as working directory.
    pub command: StaticCommand,

    /// Tried once, with the same arguments, when `command` fails.
    pub fallback: Option<StaticCommand>,
}

/// Detection table, highest priority first.
pub static INSTALL_RULES: &[InstallRule] = &[
    InstallRule {
        marker: "package.json",
        ecosystem: Ecosystem::Npm,
        command: StaticCommand {
            program: "npm",
            args: &["install"],
        },
        fallback: None,
    },
    InstallRule {
        marker: "requirements.txt",
        ecosystem: Ecosystem::Pip,
        command: StaticCommand {
            program: "pip",
            args: &["install", "-r", "requirements.txt"],
        },
        fallback: Some(StaticCommand {
            program: "pip3",
            args: &["install", "-r", "requirements.txt"],
        }),
    },
    InstallRule {
        marker: "go.mod",
        ecosystem: Ecosystem::Go,
        command: StaticCommand {
            program: "go",
            args: &["mod", "tidy"],
        },
        fallback: None,
    },
    InstallRule {
        marker: "Cargo.toml",
        ecosystem: Ecosystem::Cargo,
        command: StaticCommand {
            program: "cargo",
            args: &["fetch"],
        },
        fallback: None,
    },
];

/// Return the first rule whose marker is present, per `has_marker`.
pub fn detect(mut has_marker: impl FnMut(&str) -> bool) -> Option<&'static InstallRule> {
    INSTALL_RULES.iter().find(|rule| has_marker(rule.marker))
}
