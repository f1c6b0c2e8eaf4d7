use crate::core::types::CommandSpec;
use colored::Colorize;

pub mod prompt;

pub use prompt::PromptGate;

/// Disable colors when stdout is not a terminal or NO_COLOR is set
pub fn init_colors() {
    use std::io::IsTerminal;

    if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Console output channels.
///
/// Error, warning, success and info lines are all gated by `enabled`;
/// `result` always prints so machine-read summaries survive `--quiet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reporter {
    enabled: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(enabled: bool, verbose: bool) -> Self {
        Self { enabled, verbose }
    }

    pub fn quiet() -> Self {
        Self::new(false, false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn header(&self, title: &str) {
        if self.enabled {
            println!("\n{}", title.bold().underline());
        }
    }

    pub fn success(&self, msg: &str, level: usize) {
        if self.enabled {
            println!("{}{} {}", indent(level), "✓".green().bold(), msg);
        }
    }

    pub fn info(&self, msg: &str, level: usize) {
        if self.enabled {
            println!("{}{} {}", indent(level), "ℹ".blue().bold(), msg);
        }
    }

    pub fn warning(&self, msg: &str, level: usize) {
        if self.enabled {
            eprintln!("{}{} {}", indent(level), "⚠".yellow().bold(), msg);
        }
    }

    pub fn error(&self, msg: &str, level: usize) {
        if self.enabled {
            eprintln!("{}{} {}", indent(level), "✗".red().bold(), msg);
        }
    }

    /// Echo a command before it runs (verbose only)
    pub fn command(&self, command: &CommandSpec, level: usize) {
        if self.enabled && self.verbose {
            println!("{}{} {}", indent(level), "$".dimmed(), command.to_string().dimmed());
        }
    }

    pub fn result(&self, line: &str) {
        println!("{}", line);
    }
}

fn indent(level: usize) -> String {
    " ".repeat(level * 2)
}
