//! End-to-end scaffolding against the in-memory filesystem.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use janus_adapters::MemoryFilesystem;
use janus_core::{
    application::{
        ApplicationError, CommandRunner, Filesystem, GitOutcome, InstallOutcome, ProgressEvent,
        ProgressReporter, ScaffoldRequest, ScaffoldService, TemplateEntry, TemplateStore,
    },
    domain::{CommandSpec, Ecosystem, NextStep, ProjectName, TemplateRef},
    error::{JanusError, JanusResult},
};

const ROOT: &str = "/templates";

struct MemoryStore {
    fs: MemoryFilesystem,
}

impl TemplateStore for MemoryStore {
    fn root(&self) -> PathBuf {
        PathBuf::from(ROOT)
    }

    fn locate(&self, template: &TemplateRef) -> Option<PathBuf> {
        let path = Path::new(ROOT).join(template.relative_path());
        self.fs.exists(&path).then_some(path)
    }

    fn list(&self) -> JanusResult<Vec<TemplateEntry>> {
        Ok(Vec::new())
    }
}

/// Records commands and fails any whose program is listed in `broken`.
#[derive(Default)]
struct RecordingRunner {
    broken: Vec<&'static str>,
    ran: Mutex<Vec<String>>,
}

impl CommandRunner for RecordingRunner {
    fn is_available(&self, _program: &str) -> bool {
        true
    }

    fn run(&self, _dir: &Path, command: &CommandSpec) -> JanusResult<()> {
        self.ran.lock().unwrap().push(command.to_string());
        if self.broken.contains(&command.program.as_str()) {
            return Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: "exit status: 1".into(),
            }
            .into());
        }
        Ok(())
    }
}

#[derive(Default)]
struct Events(Mutex<Vec<ProgressEvent>>);

impl ProgressReporter for Events {
    fn report(&self, event: ProgressEvent) {
        self.0.lock().unwrap().push(event);
    }
}

fn setup(runner: RecordingRunner) -> (MemoryFilesystem, Arc<RecordingRunner>, ScaffoldService) {
    let fs = MemoryFilesystem::new();
    fs.add_file("/templates/python/flask/app.py", "from flask import Flask\n");
    fs.add_file("/templates/python/flask/requirements.txt", "flask\n");
    fs.add_dir("/templates/python/flask/static");
    fs.add_file("/templates/web/react/package.json", "{}");
    fs.add_file("/templates/web/react/src/index.js", "");

    let runner = Arc::new(runner);
    let service = ScaffoldService::new(
        Box::new(MemoryStore { fs: fs.clone() }),
        Arc::new(fs.clone()),
        runner.clone(),
    );
    (fs, runner, service)
}

fn request(domain: &str, subdomain: &str, name: &str) -> ScaffoldRequest {
    ScaffoldRequest {
        parent_dir: PathBuf::from("/work"),
        ..ScaffoldRequest::new(
            TemplateRef::new(domain, Some(subdomain)).unwrap(),
            ProjectName::sanitize(name),
        )
    }
}

#[test]
fn flask_project_is_copied_installed_and_committed() {
    let (fs, runner, service) = setup(RecordingRunner::default());
    let events = Events::default();

    let report = service
        .scaffold(&request("python", "flask", "My Cool App!"), &events)
        .unwrap();

    assert_eq!(report.project_dir, PathBuf::from("/work/my-cool-app"));
    assert_eq!(
        fs.read_file(Path::new("/work/my-cool-app/app.py")),
        Some(b"from flask import Flask\n".to_vec())
    );
    assert!(fs.is_dir(Path::new("/work/my-cool-app/static")));
    assert!(matches!(
        report.install,
        Some(InstallOutcome::Installed {
            ecosystem: Ecosystem::Pip,
            ..
        })
    ));
    assert_eq!(report.git, Some(GitOutcome::Committed));
    assert_eq!(report.next_step, NextStep::PythonMain);

    assert_eq!(
        *runner.ran.lock().unwrap(),
        vec![
            "pip install -r requirements.txt",
            "git init",
            "git add .",
            "git commit -m \"Initial commit from Janus\"",
        ]
    );

    let events = events.0.lock().unwrap();
    assert!(matches!(events.first(), Some(ProgressEvent::CopyStarted { .. })));
    assert_eq!(events.last(), Some(&ProgressEvent::GitFinished(GitOutcome::Committed)));
}

#[test]
fn pip_failure_falls_back_to_pip3() {
    let (_fs, runner, service) = setup(RecordingRunner {
        broken: vec!["pip"],
        ..Default::default()
    });

    let report = service
        .scaffold(&request("python", "flask", "api"), &Events::default())
        .unwrap();

    assert!(matches!(
        report.install,
        Some(InstallOutcome::Installed { ref command, .. }) if command.program == "pip3"
    ));
    assert_eq!(runner.ran.lock().unwrap()[1], "pip3 install -r requirements.txt");
}

#[test]
fn failed_install_and_git_do_not_fail_the_scaffold() {
    let (fs, _runner, service) = setup(RecordingRunner {
        broken: vec!["npm", "git"],
        ..Default::default()
    });

    let report = service
        .scaffold(&request("web", "react", "site"), &Events::default())
        .unwrap();

    assert!(matches!(report.install, Some(InstallOutcome::Failed { .. })));
    assert!(matches!(report.git, Some(GitOutcome::Failed { .. })));
    assert_eq!(report.next_step, NextStep::NpmRunDev);
    assert!(fs.exists(Path::new("/work/site/package.json")));
}

#[test]
fn partial_copy_is_rolled_back() {
    let (fs, runner, service) = setup(RecordingRunner::default());
    fs.fail_on("/work/broken/requirements.txt");

    let err = service
        .scaffold(&request("python", "flask", "broken"), &Events::default())
        .unwrap_err();

    assert!(matches!(
        err,
        JanusError::Application(ApplicationError::FilesystemError { .. })
    ));
    assert!(!fs.exists(Path::new("/work/broken")));
    assert!(fs.list_files().iter().all(|p| !p.starts_with("/work")));
    assert!(runner.ran.lock().unwrap().is_empty());
}

#[test]
fn existing_project_is_left_untouched() {
    let (fs, runner, service) = setup(RecordingRunner::default());
    fs.add_file("/work/taken/keep.txt", "mine");

    let err = service
        .scaffold(&request("python", "flask", "taken"), &Events::default())
        .unwrap_err();

    assert!(matches!(
        err,
        JanusError::Application(ApplicationError::ProjectExists { .. })
    ));
    assert_eq!(
        fs.read_file(Path::new("/work/taken/keep.txt")),
        Some(b"mine".to_vec())
    );
    assert!(runner.ran.lock().unwrap().is_empty());
}
