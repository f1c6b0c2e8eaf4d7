//! Upgrade command
//!
//! Walks every enabled backend, shows what is outdated and upgrades
//! each one the user confirms.

use crate::config::Settings;
use crate::core::types::{BackendOutcome, BackendState};
use crate::error::Result;
use crate::ui::{PromptGate, Reporter};

pub fn run(settings: &Settings, reporter: Reporter) -> Result<()> {
    let orchestrator = super::build_orchestrator(settings, reporter, true);
    let mut gate = PromptGate::stdin();

    let outcomes = orchestrator.run_interactive_upgrade(&mut gate);
    summarize(&outcomes, reporter);

    Ok(())
}

fn summarize(outcomes: &[BackendOutcome], reporter: Reporter) {
    reporter.header(&summary_line(outcomes));
}

/// e.g. `Summary: 1 upgraded, 0 skipped, 2 up to date, 0 failed, 3 not installed`
fn summary_line(outcomes: &[BackendOutcome]) -> String {
    let parts: Vec<String> = [
        BackendState::Upgraded,
        BackendState::Skipped,
        BackendState::UpToDate,
        BackendState::Failed,
        BackendState::Unavailable,
    ]
    .iter()
    .map(|state| {
        let n = outcomes.iter().filter(|o| o.state == *state).count();
        format!("{} {}", n, state)
    })
    .collect();

    format!("Summary: {}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, state: BackendState) -> BackendOutcome {
        BackendOutcome {
            name: name.to_string(),
            state,
        }
    }

    #[test]
    fn summary_counts_every_state() {
        let outcomes = vec![
            outcome("apt", BackendState::Upgraded),
            outcome("snap", BackendState::Unavailable),
            outcome("pip2", BackendState::Unavailable),
            outcome("pip3", BackendState::UpToDate),
            outcome("pacman", BackendState::Failed),
        ];

        assert_eq!(
            summary_line(&outcomes),
            "Summary: 1 upgraded, 0 skipped, 1 up to date, 1 failed, 2 not installed"
        );
    }
}
