//! `janus <domain> [subdomain]`: scaffold a project from a template.
//!
//! Responsibility: resolve the template, obtain and sanitise the project
//! name, call the core scaffold service and render its progress. No business
//! logic lives here.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use janus_adapters::{LocalFilesystem, LocalTemplateStore, SystemCommandRunner};
use janus_core::{
    application::{
        ApplicationError, GitOutcome, InstallOutcome, ProgressEvent, ProgressReporter,
        ScaffoldReport, ScaffoldRequest, ScaffoldService, TemplateService,
    },
    domain::{ProjectName, TemplateRef},
    error::JanusError,
};

use crate::{
    cli::Cli,
    commands::{list::describe, templates_root},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a scaffold.
///
/// Dispatch sequence:
/// 1. Validate the template reference and resolve it under the templates root
/// 2. Ask for the project name unless `--name` was given
/// 3. Scaffold via `ScaffoldService`, rendering progress as it happens
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(domain = %domain))]
pub fn execute(
    cli: &Cli,
    config: &AppConfig,
    output: &OutputManager,
    domain: &str,
    subdomain: Option<&str>,
) -> CliResult<()> {
    let template = TemplateRef::new(domain, subdomain).map_err(JanusError::from)?;
    let root = templates_root(cli, config)?;

    let store = LocalTemplateStore::new(&root);
    let service = ScaffoldService::new(
        Box::new(store.clone()),
        Arc::new(LocalFilesystem::new()),
        Arc::new(SystemCommandRunner::new()),
    );

    // 1. Template must exist before we ask for anything.
    match service.locate_template(&template) {
        Ok(path) => debug!(path = %path.display(), "Template found"),
        Err(JanusError::Application(ApplicationError::TemplateNotFound { template, path })) => {
            let available: Vec<String> = TemplateService::new(Box::new(store))
                .list()
                .map(|entries| entries.iter().map(describe).collect())
                .unwrap_or_default();
            return Err(CliError::TemplateNotFound {
                template,
                path,
                available,
            });
        }
        Err(e) => return Err(e.into()),
    }

    // 2. Project name
    let default_name = template.default_project_name();
    let raw_name = match &cli.name {
        Some(name) => name.trim().to_owned(),
        None => prompt_project_name(&default_name)?,
    };
    let project_name = ProjectName::sanitize(&raw_name);
    if project_name.as_str() != raw_name.trim() {
        output.info(&format!("Using project name '{project_name}'"))?;
    }

    // 3. Scaffold
    let request = ScaffoldRequest {
        install_dependencies: config.scaffold.install_dependencies && !cli.no_install,
        init_git: config.scaffold.init_git && !cli.no_git,
        commit_message: config.scaffold.commit_message.clone(),
        ..ScaffoldRequest::new(template, project_name)
    };
    info!(project = %request.project_name, template = %request.template, "Scaffold started");

    let report = service.scaffold(&request, &ConsoleReporter { output })?;

    // 4. Next steps
    print_next_steps(output, &request, &report)?;
    Ok(())
}

/// Ask for a project name on stdin; an empty answer takes `default`.
fn prompt_project_name(default: &str) -> CliResult<String> {
    #[cfg(feature = "interactive")]
    {
        if io::stdin().is_terminal() {
            return dialoguer::Input::<String>::new()
                .with_prompt("Enter your project name")
                .default(default.to_owned())
                .interact_text()
                .map_err(|e| CliError::Prompt {
                    message: e.to_string(),
                });
        }
    }

    let mut stdout = io::stdout();
    write!(stdout, "Enter your project name (default: {default}): ")?;
    stdout.flush()?;
    if !io::stdin().is_terminal() {
        // Keep the transcript readable when input is piped.
        writeln!(stdout)?;
    }

    read_name(io::stdin().lock(), default)
}

fn read_name(mut input: impl BufRead, default: &str) -> CliResult<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    Ok(if answer.is_empty() {
        default.to_owned()
    } else {
        answer.to_owned()
    })
}

fn print_next_steps(
    output: &OutputManager,
    request: &ScaffoldRequest,
    report: &ScaffoldReport,
) -> CliResult<()> {
    output.print("")?;
    output.header("🎉 Project ready! Next steps:")?;
    output.print(&format!("  cd {}", request.project_name))?;
    output.print(&format!("  {}", report.next_step.command()))?;
    Ok(())
}

/// Renders scaffold progress as it happens.
struct ConsoleReporter<'a> {
    output: &'a OutputManager,
}

impl ConsoleReporter<'_> {
    fn render(&self, event: ProgressEvent) -> io::Result<()> {
        let out = self.output;
        match event {
            ProgressEvent::CopyStarted { project, template } => out.print(&format!(
                "Scaffolding project '{project}' from template '{template}'..."
            )),
            ProgressEvent::CopyFinished { project_dir } => out.success(&format!(
                "Project scaffolded successfully in '{}'",
                project_dir.display()
            )),
            ProgressEvent::InstallStarted { marker, ecosystem } => out.print(&format!(
                "📦 Found {marker}, installing {ecosystem} dependencies..."
            )),
            ProgressEvent::InstallRetrying { command } => {
                out.warning(&format!("Install failed, retrying with `{command}`"))
            }
            ProgressEvent::InstallFinished(outcome) => match outcome {
                InstallOutcome::Skipped => out.info(
                    "No recognized dependency files found, skipping dependency installation",
                ),
                InstallOutcome::Installed { ecosystem, .. } => {
                    out.success(&format!("{ecosystem} dependencies installed successfully"))
                }
                InstallOutcome::Failed {
                    command, reason, ..
                } => out.warning(&format!("Warning: `{command}` failed: {reason}")),
            },
            ProgressEvent::GitStarted => out.print("🔧 Initializing git repository..."),
            ProgressEvent::GitInitialized => out.success("Git repository initialized"),
            ProgressEvent::GitCommitting => out.print("📝 Creating initial commit..."),
            ProgressEvent::GitFinished(outcome) => match outcome {
                GitOutcome::Committed => out.success("Initial commit created"),
                GitOutcome::ToolMissing => {
                    out.warning("Git not found, skipping git initialization")
                }
                GitOutcome::AlreadyRepository => {
                    out.info("Directory is already a git repository")
                }
                GitOutcome::Failed { step, reason } => {
                    out.warning(&format!("Warning: {step} failed: {reason}"))
                }
            },
        }
    }
}

impl ProgressReporter for ConsoleReporter<'_> {
    fn report(&self, event: ProgressEvent) {
        if let Err(e) = self.render(event) {
            debug!(error = %e, "Failed to write progress");
        }
    }
}
