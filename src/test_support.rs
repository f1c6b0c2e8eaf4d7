//! Test doubles shared by unit tests

use crate::core::types::{CommandSpec, ExecutionResult, OutputMode};
use crate::traits::{CommandRunner, Confirm};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub(crate) fn ok(stdout: &str) -> ExecutionResult {
    ExecutionResult::new(Some(stdout.to_string()), String::new(), 0)
}

pub(crate) fn failed(status: i32, stderr: &str) -> ExecutionResult {
    ExecutionResult::new(Some(String::new()), stderr.to_string(), status)
}

/// Replays canned results keyed by the rendered command line (and
/// optionally the working directory). Unscripted commands fail with
/// status 1.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    available: HashSet<String>,
    responses: HashMap<(Option<PathBuf>, String), ExecutionResult>,
    calls: Mutex<Vec<(String, Option<PathBuf>)>>,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn available(mut self, executables: &[&str]) -> Self {
        self.available.extend(executables.iter().map(|e| e.to_string()));
        self
    }

    pub(crate) fn respond(mut self, command: &str, result: ExecutionResult) -> Self {
        self.responses.insert((None, command.to_string()), result);
        self
    }

    pub(crate) fn respond_in(mut self, dir: &Path, command: &str, result: ExecutionResult) -> Self {
        self.responses
            .insert((Some(dir.to_path_buf()), command.to_string()), result);
        self
    }

    pub(crate) fn calls(&self) -> Vec<(String, Option<PathBuf>)> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|(command, _)| command).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &CommandSpec, mode: OutputMode, cwd: Option<&Path>) -> ExecutionResult {
        let rendered = command.to_string();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((rendered.clone(), cwd.map(Path::to_path_buf)));
        }

        let scripted = self
            .responses
            .get(&(cwd.map(Path::to_path_buf), rendered.clone()))
            .or_else(|| self.responses.get(&(None, rendered)))
            .cloned()
            .unwrap_or_else(|| failed(1, "not scripted"));

        match mode {
            OutputMode::Capture => scripted,
            OutputMode::Stream | OutputMode::Discard => ExecutionResult { output: None, ..scripted },
        }
    }

    fn is_available(&self, executable: &str) -> bool {
        self.available.contains(executable)
    }
}

/// Confirmation gate answering from a fixed script; declines once empty
#[derive(Debug, Default)]
pub(crate) struct ScriptedGate {
    answers: VecDeque<bool>,
    pub(crate) questions: Vec<String>,
}

impl ScriptedGate {
    pub(crate) fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            questions: Vec::new(),
        }
    }
}

impl Confirm for ScriptedGate {
    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
