//! Git repository initialisation for freshly scaffolded projects.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{CommandRunner, Filesystem, ProgressEvent, ProgressReporter},
    domain::CommandSpec,
};

/// Commit message used when none is configured.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit from Janus";

/// The git steps, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStep {
    Init,
    Add,
    Commit,
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Init => "git init",
            Self::Add => "git add",
            Self::Commit => "git commit",
        })
    }
}

/// Result of a git initialisation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOutcome {
    /// Repository created and initial commit recorded.
    Committed,
    /// `git` is not on the search path.
    ToolMissing,
    /// The project already contains a `.git` directory.
    AlreadyRepository,
    /// `step` failed; later steps were not attempted.
    Failed { step: GitStep, reason: String },
}

/// Runs `git init`, `git add .` and `git commit` in a project directory.
pub struct GitInitializer {
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
}

impl GitInitializer {
    pub fn new(filesystem: Arc<dyn Filesystem>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { filesystem, runner }
    }

    #[instrument(skip_all, fields(project_dir = %project_dir.display()))]
    pub fn initialize(
        &self,
        project_dir: &Path,
        commit_message: &str,
        reporter: &dyn ProgressReporter,
    ) -> GitOutcome {
        let outcome = self.run_steps(project_dir, commit_message, reporter);
        if let GitOutcome::Failed { step, reason } = &outcome {
            warn!(%step, %reason, "Git initialisation stopped");
        }
        reporter.report(ProgressEvent::GitFinished(outcome.clone()));
        outcome
    }

    fn run_steps(
        &self,
        project_dir: &Path,
        commit_message: &str,
        reporter: &dyn ProgressReporter,
    ) -> GitOutcome {
        if !self.runner.is_available("git") {
            info!("git not found on PATH");
            return GitOutcome::ToolMissing;
        }

        if self.filesystem.exists(&project_dir.join(".git")) {
            return GitOutcome::AlreadyRepository;
        }

        reporter.report(ProgressEvent::GitStarted);
        if let Err(outcome) = self.step(project_dir, GitStep::Init, ["init"]) {
            return outcome;
        }
        reporter.report(ProgressEvent::GitInitialized);

        reporter.report(ProgressEvent::GitCommitting);
        if let Err(outcome) = self.step(project_dir, GitStep::Add, ["add", "."]) {
            return outcome;
        }
        if let Err(outcome) =
            self.step(project_dir, GitStep::Commit, ["commit", "-m", commit_message])
        {
            return outcome;
        }

        info!("Initial commit created");
        GitOutcome::Committed
    }

    fn step<const N: usize>(
        &self,
        dir: &Path,
        step: GitStep,
        args: [&str; N],
    ) -> Result<(), GitOutcome> {
        self.runner
            .run(dir, &CommandSpec::new("git", args))
            .map_err(|e| GitOutcome::Failed {
                step,
                reason: e.to_string(),
            })
    }
}
