//! Count command
//!
//! Prints one summary line of pending updates per backend, e.g.
//! `apt: 3 | pip3: 1`. Nothing is upgraded and nothing is asked.

use crate::config::Settings;
use crate::error::Result;
use crate::ui::Reporter;

pub struct CountOptions {
    /// Refresh package metadata before counting
    pub refresh: bool,
    /// Allow the sudo-prefixed refresh commands to run
    pub allow_sudo: bool,
}

pub fn run(settings: &Settings, reporter: Reporter, options: CountOptions) -> Result<()> {
    let orchestrator = super::build_orchestrator(settings, reporter, options.allow_sudo);
    let report = orchestrator.run_count_only(options.refresh);

    reporter.result(&report.to_string());
    Ok(())
}
