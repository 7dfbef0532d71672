//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Locate the template directory
//! 2. Refuse to touch an existing project directory
//! 3. Copy the template tree (removing the partial copy on failure)
//! 4. Install dependencies (non-fatal)
//! 5. Initialise git (non-fatal)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, ProgressEvent, ProgressReporter, TemplateStore},
        services::{
            DependencyInstaller, GitInitializer, GitOutcome, InstallOutcome,
            git_initializer::DEFAULT_COMMIT_MESSAGE,
        },
    },
    domain::{NextStep, ProjectName, TemplateRef},
    error::JanusResult,
};

/// Everything needed to scaffold one project.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub template: TemplateRef,
    pub project_name: ProjectName,
    /// Directory the project directory is created in.
    pub parent_dir: PathBuf,
    pub install_dependencies: bool,
    pub init_git: bool,
    pub commit_message: String,
}

impl ScaffoldRequest {
    /// A request with installation and git enabled, creating the project in
    /// the current directory.
    pub fn new(template: TemplateRef, project_name: ProjectName) -> Self {
        Self {
            template,
            project_name,
            parent_dir: PathBuf::from("."),
            install_dependencies: true,
            init_git: true,
            commit_message: DEFAULT_COMMIT_MESSAGE.to_owned(),
        }
    }

    pub fn project_dir(&self) -> PathBuf {
        self.parent_dir.join(self.project_name.as_str())
    }
}

/// What a successful scaffold did.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldReport {
    pub project_dir: PathBuf,
    /// `None` when installation was disabled.
    pub install: Option<InstallOutcome>,
    /// `None` when git initialisation was disabled.
    pub git: Option<GitOutcome>,
    pub next_step: NextStep,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    filesystem: Arc<dyn Filesystem>,
    installer: DependencyInstaller,
    git: GitInitializer,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Arc<dyn Filesystem>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            store,
            installer: DependencyInstaller::new(Arc::clone(&filesystem), Arc::clone(&runner)),
            git: GitInitializer::new(Arc::clone(&filesystem), runner),
            filesystem,
        }
    }

    /// Resolve a template reference to its directory.
    pub fn locate_template(&self, template: &TemplateRef) -> JanusResult<PathBuf> {
        self.store.locate(template).ok_or_else(|| {
            ApplicationError::TemplateNotFound {
                template: template.name(),
                path: self.store.root().join(template.relative_path()),
            }
            .into()
        })
    }

    /// Scaffold a new project.
    ///
    /// Copy failures are returned as errors after a best-effort removal of the
    /// partially written project directory. Installation and git failures are
    /// recorded in the report instead.
    #[instrument(
        skip_all,
        fields(
            template = %request.template,
            project = %request.project_name,
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        reporter: &dyn ProgressReporter,
    ) -> JanusResult<ScaffoldReport> {
        let template_dir = self.locate_template(&request.template)?;
        let project_dir = request.project_dir();

        if self.filesystem.exists(&project_dir) {
            return Err(ApplicationError::ProjectExists { path: project_dir }.into());
        }

        reporter.report(ProgressEvent::CopyStarted {
            project: request.project_name.clone(),
            template: request.template.clone(),
        });
        info!(from = %template_dir.display(), to = %project_dir.display(), "Copying template");

        if let Err(e) = self.filesystem.copy_tree(&template_dir, &project_dir) {
            warn!(error = %e, "Copy failed, attempting rollback");
            self.rollback(&project_dir);
            return Err(e);
        }
        reporter.report(ProgressEvent::CopyFinished {
            project_dir: project_dir.clone(),
        });

        let install = request
            .install_dependencies
            .then(|| self.installer.install(&project_dir, reporter));

        let git = request
            .init_git
            .then(|| self.git.initialize(&project_dir, &request.commit_message, reporter));

        info!("Scaffold completed successfully");
        Ok(ScaffoldReport {
            project_dir,
            install,
            git,
            next_step: NextStep::for_template(&request.template.name()),
        })
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if !self.filesystem.exists(root) {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
