//! Real process execution and executable lookup

use crate::core::types::{CommandSpec, ExecutionResult, NO_EXIT_STATUS, OutputMode};
use crate::traits::CommandRunner;
use crate::utils::platform::build_program_command;
use std::io::Read;
use std::path::Path;
use std::process::Stdio;
use std::thread;

/// `CommandRunner` backed by `std::process` and `which`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec, mode: OutputMode, cwd: Option<&Path>) -> ExecutionResult {
        let mut cmd = match build_program_command(command) {
            Ok(cmd) => cmd,
            Err(e) => return ExecutionResult::spawn_failure(e.to_string()),
        };

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        // Captured commands are queries and must never wait on the user
        match mode {
            OutputMode::Capture => cmd.stdin(Stdio::null()).stdout(Stdio::piped()),
            OutputMode::Stream => cmd.stdin(Stdio::inherit()).stdout(Stdio::inherit()),
            OutputMode::Discard => cmd.stdin(Stdio::inherit()).stdout(Stdio::piped()),
        };
        cmd.stderr(Stdio::piped());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => return ExecutionResult::spawn_failure(e.to_string()),
        };

        // Both pipes are drained on their own threads so a chatty child
        // never blocks on a full pipe while we wait for it.
        let stdout_thread = child.stdout.take().map(|stdout| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = std::io::BufReader::new(stdout).read_to_end(&mut buf);
                buf
            })
        });
        let stderr_thread = child.stderr.take().map(|stderr| {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = std::io::BufReader::new(stderr).read_to_end(&mut buf);
                buf
            })
        });

        let status = match child.wait() {
            Ok(status) => status.code().unwrap_or(NO_EXIT_STATUS),
            Err(e) => {
                let _ = child.kill();
                return ExecutionResult::spawn_failure(e.to_string());
            }
        };

        let stdout = stdout_thread
            .map(|handle| handle.join().unwrap_or_default())
            .unwrap_or_default();
        let stderr = stderr_thread
            .map(|handle| handle.join().unwrap_or_default())
            .unwrap_or_default();

        let output = match mode {
            OutputMode::Capture => Some(String::from_utf8_lossy(&stdout).into_owned()),
            OutputMode::Stream | OutputMode::Discard => None,
        };

        ExecutionResult::new(output, String::from_utf8_lossy(&stderr).into_owned(), status)
    }

    fn is_available(&self, executable: &str) -> bool {
        which::which(executable).is_ok()
    }
}
