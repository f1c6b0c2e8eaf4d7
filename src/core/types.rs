use std::fmt;

/// Exit status reported when the process never produced one
/// (spawn failure or killed by a signal).
pub const NO_EXIT_STATUS: i32 = -1;

/// Report label used when no backend on the host could be checked.
pub const NO_MANAGER_FOUND: &str = "No supported package manager found";

/// An external program invocation: program name, arguments and whether it
/// must run with elevated privilege.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    elevated: bool,
    accepted_statuses: Vec<i32>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            elevated: false,
            accepted_statuses: Vec::new(),
        }
    }

    /// Same as `new`, tagged as requiring elevated privilege
    pub fn elevated<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elevated: true,
            ..Self::new(program, args)
        }
    }

    /// Build from shell-style tokens. Returns None for an empty token list.
    pub fn from_tokens(tokens: &[String]) -> Option<Self> {
        let (program, args) = tokens.split_first()?;
        if program.is_empty() {
            return None;
        }
        Some(Self::new(program, args.iter().cloned()))
    }

    /// Exit statuses other than 0 that still mean success for this tool
    pub fn accepting(mut self, statuses: &[i32]) -> Self {
        self.accepted_statuses.extend_from_slice(statuses);
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    pub fn is_success(&self, status: i32) -> bool {
        status == 0 || self.accepted_statuses.contains(&status)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elevated {
            write!(f, "sudo ")?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How the runner should treat the child's stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Collect stdout and hand it back to the caller
    Capture,
    /// Let stdout reach the terminal
    Stream,
    /// Read stdout to the end and throw it away
    Discard,
}

/// Outcome of one external process invocation. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Captured stdout. `None` when nothing was captured or the process
    /// could not be started.
    pub output: Option<String>,
    pub stderr: String,
    pub status: i32,
}

impl ExecutionResult {
    pub fn new(output: Option<String>, stderr: String, status: i32) -> Self {
        Self {
            output,
            stderr,
            status,
        }
    }

    pub fn spawn_failure(reason: String) -> Self {
        Self::new(None, reason, NO_EXIT_STATUS)
    }

    /// Result of a command that was deliberately not run
    pub fn skipped() -> Self {
        Self::new(None, String::new(), 0)
    }
}

/// Terminal state of one backend after an orchestrator pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    Unavailable,
    UpToDate,
    Upgraded,
    Skipped,
    Failed,
}

impl fmt::Display for BackendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "not installed"),
            Self::UpToDate => write!(f, "up to date"),
            Self::Upgraded => write!(f, "upgraded"),
            Self::Skipped => write!(f, "skipped"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOutcome {
    pub name: String,
    pub state: BackendState,
}

/// Value recorded for one backend in count-only mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCount {
    Pending(usize),
    /// Listing (or the refresh before it) failed to execute
    Failed,
    /// Synthetic entry when no backend was available at all
    NotFound,
}

impl UpdateCount {
    /// Numeric form of the entry: the count, or a negative sentinel.
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Pending(count) => i64::try_from(*count).unwrap_or(i64::MAX),
            Self::Failed => -2,
            Self::NotFound => -1,
        }
    }
}

impl fmt::Display for UpdateCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending(count) => write!(f, "{}", count),
            Self::Failed => write!(f, "failed"),
            Self::NotFound => write!(f, "{}", self.as_i64()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub name: String,
    pub count: UpdateCount,
}

/// Count-only result, ordered by backend registration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    entries: Vec<ReportEntry>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_manager_found() -> Self {
        let mut report = Self::new();
        report.record(NO_MANAGER_FOUND, UpdateCount::NotFound);
        report
    }

    pub fn record(&mut self, name: &str, count: UpdateCount) {
        self.entries.push(ReportEntry {
            name: name.to_string(),
            count,
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as `(name, numeric value)` pairs
    pub fn as_pairs(&self) -> Vec<(&str, i64)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), entry.count.as_i64()))
            .collect()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self
            .entries
            .iter()
            .map(|entry| format!("{}: {}", entry.name, entry.count))
            .collect::<Vec<_>>()
            .join(" | ");
        write!(f, "{}", line)
    }
}
