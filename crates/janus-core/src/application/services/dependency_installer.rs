//! Dependency installation for freshly scaffolded projects.
//!
//! Failures here never abort a scaffold: the project is already on disk, so
//! every outcome is returned as a value for the caller to report.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{CommandRunner, Filesystem, ProgressEvent, ProgressReporter},
    domain::{CommandSpec, Ecosystem, dependencies},
};

/// Result of one dependency-installation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No marker file was present.
    Skipped,
    /// `command` ran successfully.
    Installed {
        ecosystem: Ecosystem,
        command: CommandSpec,
    },
    /// Every candidate command failed; `command` is the last one tried.
    Failed {
        ecosystem: Ecosystem,
        command: CommandSpec,
        reason: String,
    },
}

/// Detects the project's ecosystem and runs its install command.
pub struct DependencyInstaller {
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
}

impl DependencyInstaller {
    pub fn new(filesystem: Arc<dyn Filesystem>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// Install dependencies for the project rooted at `project_dir`.
    ///
    /// Only the first matching rule runs. A rule's fallback command is tried
    /// once when its primary command fails.
    #[instrument(skip_all, fields(project_dir = %project_dir.display()))]
    pub fn install(&self, project_dir: &Path, reporter: &dyn ProgressReporter) -> InstallOutcome {
        let Some(rule) =
            dependencies::detect(|marker| self.filesystem.exists(&project_dir.join(marker)))
        else {
            debug!("No dependency marker found");
            let outcome = InstallOutcome::Skipped;
            reporter.report(ProgressEvent::InstallFinished(outcome.clone()));
            return outcome;
        };

        info!(marker = rule.marker, ecosystem = %rule.ecosystem, "Installing dependencies");
        reporter.report(ProgressEvent::InstallStarted {
            marker: rule.marker,
            ecosystem: rule.ecosystem,
        });

        let primary = rule.command.to_spec();
        let mut outcome = self.attempt(project_dir, rule.ecosystem, primary);

        if let (InstallOutcome::Failed { reason, .. }, Some(fallback)) = (&outcome, rule.fallback) {
            let fallback = fallback.to_spec();
            warn!(%reason, retry = %fallback, "Install command failed, retrying");
            reporter.report(ProgressEvent::InstallRetrying {
                command: fallback.clone(),
            });
            outcome = self.attempt(project_dir, rule.ecosystem, fallback);
        }

        reporter.report(ProgressEvent::InstallFinished(outcome.clone()));
        outcome
    }

    fn attempt(&self, dir: &Path, ecosystem: Ecosystem, command: CommandSpec) -> InstallOutcome {
        match self.runner.run(dir, &command) {
            Ok(()) => InstallOutcome::Installed { ecosystem, command },
            Err(e) => InstallOutcome::Failed {
                ecosystem,
                command,
                reason: e.to_string(),
            },
        }
    }
}
