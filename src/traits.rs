//! Core traits for dependency injection and testability
//!
//! Everything that touches the outside world (processes, the executable
//! search path, the user's terminal) sits behind one of these traits so
//! backends and the orchestrator can be driven by test doubles.

use crate::core::types::{CommandSpec, ExecutionResult, OutputMode};
use std::path::Path;

/// Trait for running external programs
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion in `cwd` (or the current directory).
    ///
    /// Never fails: a process that cannot be started is reported through
    /// `ExecutionResult::spawn_failure`.
    fn run(&self, command: &CommandSpec, mode: OutputMode, cwd: Option<&Path>) -> ExecutionResult;

    /// Whether `executable` resolves on the search path
    fn is_available(&self, executable: &str) -> bool;
}

/// Trait for the interactive yes/no gate
pub trait Confirm {
    /// Block until the user gives a valid answer
    fn confirm(&mut self, question: &str) -> bool;
}
