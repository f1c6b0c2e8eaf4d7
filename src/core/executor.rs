//! Process executor shared by every backend.
//!
//! Wraps a `CommandRunner` with the run's privilege policy and the
//! uniform failure diagnostics: a command that exits with a status it does
//! not accept is logged (command, stderr, stdout) and its result handed
//! back untouched. Callers decide what a failure means for them.

use crate::core::types::{CommandSpec, ExecutionResult, OutputMode};
use crate::error::{Result, UpdateError};
use crate::traits::CommandRunner;
use crate::ui::Reporter;
use std::path::Path;
use std::sync::Arc;

/// Indentation used for executor diagnostics, nested under a backend
const DETAIL_LEVEL: usize = 2;

#[derive(Clone)]
pub struct Executor {
    runner: Arc<dyn CommandRunner>,
    reporter: Reporter,
    allow_elevated: bool,
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("reporter", &self.reporter)
            .field("allow_elevated", &self.allow_elevated)
            .finish_non_exhaustive()
    }
}

impl Executor {
    pub fn new(runner: Arc<dyn CommandRunner>, reporter: Reporter, allow_elevated: bool) -> Self {
        Self {
            runner,
            reporter,
            allow_elevated,
        }
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn is_available(&self, executable: &str) -> bool {
        self.runner.is_available(executable)
    }

    /// Run `command` once, blocking until it exits.
    ///
    /// With `capture` the child's stdout is returned in the result. Without
    /// it stdout goes to the terminal when reporting is enabled and is
    /// drained and dropped otherwise. Elevated commands are skipped (and
    /// reported as a successful no-op) when the run does not allow them.
    pub fn execute(&self, command: &CommandSpec, capture: bool, cwd: Option<&Path>) -> ExecutionResult {
        if command.is_elevated() && !self.allow_elevated {
            self.reporter.info(
                &format!("Skipping privileged command '{}' (use --allow-sudo)", command),
                DETAIL_LEVEL,
            );
            return ExecutionResult::skipped();
        }

        self.reporter.command(command, DETAIL_LEVEL);

        let mode = if capture {
            OutputMode::Capture
        } else if self.reporter.is_enabled() {
            OutputMode::Stream
        } else {
            OutputMode::Discard
        };

        let result = self.runner.run(command, mode, cwd);
        if !command.is_success(result.status) {
            self.report_failure(command, &result);
        }
        result
    }

    /// Run and return stdout, or `CommandFailed` on an unaccepted status
    pub fn capture(&self, command: &CommandSpec, cwd: Option<&Path>) -> Result<String> {
        let result = self.execute(command, true, cwd);
        if !command.is_success(result.status) {
            return Err(UpdateError::CommandFailed {
                command: command.to_string(),
                status: result.status,
            });
        }
        Ok(result.output.unwrap_or_default())
    }

    /// Run without capturing stdout, `CommandFailed` on an unaccepted status
    pub fn stream(&self, command: &CommandSpec, cwd: Option<&Path>) -> Result<()> {
        let result = self.execute(command, false, cwd);
        if !command.is_success(result.status) {
            return Err(UpdateError::CommandFailed {
                command: command.to_string(),
                status: result.status,
            });
        }
        Ok(())
    }

    /// Run a query whose failure is an expected answer, not an error.
    ///
    /// Nothing is logged; returns trimmed stdout on success.
    pub fn probe(&self, command: &CommandSpec, cwd: Option<&Path>) -> Option<String> {
        if command.is_elevated() && !self.allow_elevated {
            return None;
        }

        let result = self.runner.run(command, OutputMode::Capture, cwd);
        if !command.is_success(result.status) {
            return None;
        }
        result.output.map(|out| out.trim().to_string())
    }

    fn report_failure(&self, command: &CommandSpec, result: &ExecutionResult) {
        self.reporter.error(
            &format!("Command '{}' failed with status {}", command, result.status),
            DETAIL_LEVEL,
        );

        let stderr = result.stderr.trim();
        if stderr.is_empty() {
            self.reporter.error("(no error output)", DETAIL_LEVEL + 1);
        } else {
            self.reporter.error(stderr, DETAIL_LEVEL + 1);
        }

        if let Some(stdout) = result.output.as_deref().map(str::trim)
            && !stdout.is_empty()
        {
            self.reporter.info(&format!("Output: {}", stdout), DETAIL_LEVEL + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedRunner, failed, ok};

    fn executor(runner: &Arc<ScriptedRunner>, allow_elevated: bool) -> Executor {
        Executor::new(runner.clone(), Reporter::quiet(), allow_elevated)
    }

    #[test]
    fn capture_returns_stdout() {
        let runner = Arc::new(ScriptedRunner::new().respond("apt list --upgradable", ok("Listing...\n")));
        let out = executor(&runner, false)
            .capture(&CommandSpec::new("apt", ["list", "--upgradable"]), None)
            .expect("capture");
        assert_eq!(out, "Listing...\n");
    }

    #[test]
    fn capture_maps_failure_to_error() {
        let runner = Arc::new(ScriptedRunner::new().respond("snap refresh --list", failed(1, "boom")));
        let err = executor(&runner, false)
            .capture(&CommandSpec::new("snap", ["refresh", "--list"]), None)
            .unwrap_err();
        assert!(matches!(err, UpdateError::CommandFailed { status: 1, .. }));
    }

    #[test]
    fn accepted_status_is_not_a_failure() {
        let runner = Arc::new(ScriptedRunner::new().respond("pacman -Qu", failed(1, "")));
        let out = executor(&runner, false)
            .capture(&CommandSpec::new("pacman", ["-Qu"]).accepting(&[1]), None)
            .expect("status 1 accepted");
        assert_eq!(out, "");
    }

    #[test]
    fn elevated_commands_skipped_without_permission() {
        let runner = Arc::new(ScriptedRunner::new());
        let result = executor(&runner, false).execute(&CommandSpec::elevated("apt", ["update"]), false, None);

        assert_eq!(result, ExecutionResult::skipped());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn elevated_commands_run_with_permission() {
        let runner = Arc::new(ScriptedRunner::new().respond("sudo apt update", ok("")));
        executor(&runner, true)
            .stream(&CommandSpec::elevated("apt", ["update"]), None)
            .expect("apt update");
        assert_eq!(runner.commands(), vec!["sudo apt update".to_string()]);
    }

    #[test]
    fn probe_swallows_failure() {
        let runner = Arc::new(ScriptedRunner::new().respond("git symbolic-ref --short -q HEAD", ok("main\n")));
        let exec = executor(&runner, false);

        assert_eq!(
            exec.probe(&CommandSpec::new("git", ["symbolic-ref", "--short", "-q", "HEAD"]), None),
            Some("main".to_string())
        );
        assert_eq!(exec.probe(&CommandSpec::new("git", ["describe"]), None), None);
    }
}
