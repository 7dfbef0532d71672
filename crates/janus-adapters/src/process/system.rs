//! Runs external programs with `std::process::Command`.

use std::{path::Path, process::Command};

use tracing::{debug, info};

use janus_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::CommandSpec,
    error::JanusResult,
};

/// Spawns real processes, inheriting stdin, stdout and stderr.
///
/// Programs are resolved with `which` before spawning so that wrapper
/// scripts such as `npm.cmd` are found on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn is_available(&self, program: &str) -> bool {
        let found = which::which(program).is_ok();
        debug!(program, found, "Checked PATH");
        found
    }

    fn run(&self, dir: &Path, command: &CommandSpec) -> JanusResult<()> {
        let failed = |reason: String| ApplicationError::CommandFailed {
            command: command.to_string(),
            reason,
        };

        let program = which::which(&command.program)
            .map_err(|e| failed(format!("{} not found: {}", command.program, e)))?;

        info!(command = %command, dir = %dir.display(), "Running");
        let status = Command::new(&program)
            .args(&command.args)
            .current_dir(dir)
            .status()
            .map_err(|e| failed(format!("failed to start: {}", e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(failed(format!("exited with {}", status)).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unknown_program_is_unavailable() {
        let runner = SystemCommandRunner::new();
        assert!(!runner.is_available("janus-definitely-not-a-real-program"));
    }

    #[test]
    fn running_unknown_program_fails() {
        let tmp = TempDir::new().unwrap();
        let runner = SystemCommandRunner::new();
        let err = runner
            .run(
                tmp.path(),
                &CommandSpec::new("janus-definitely-not-a-real-program", ["x"]),
            )
            .unwrap_err();
        assert!(err.to_string().contains("janus-definitely-not-a-real-program"));
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_the_given_directory() {
        let tmp = TempDir::new().unwrap();
        let runner = SystemCommandRunner::new();
        if !runner.is_available("sh") {
            return;
        }

        runner
            .run(tmp.path(), &CommandSpec::new("sh", ["-c", "echo hi > marker"]))
            .unwrap();
        assert!(tmp.path().join("marker").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let runner = SystemCommandRunner::new();
        if !runner.is_available("sh") {
            return;
        }

        let err = runner
            .run(tmp.path(), &CommandSpec::new("sh", ["-c", "exit 3"]))
            .unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }
}
