//! Drives every registered backend through
//! availability → refresh → listing → (confirmation → upgrade).
//!
//! Backends are handled strictly one after another in registration order.
//! Nothing a backend does can abort the run: every failure ends that
//! backend's pass in a terminal state and the next backend starts.

use crate::core::types::{BackendOutcome, BackendState, RunReport, UpdateCount};
use crate::error::UpdateError;
use crate::packages::PackageManager;
use crate::traits::Confirm;
use crate::ui::Reporter;

const BACKEND_LEVEL: usize = 1;

pub struct Orchestrator {
    backends: Vec<Box<dyn PackageManager>>,
    reporter: Reporter,
}

impl Orchestrator {
    pub fn new(backends: Vec<Box<dyn PackageManager>>, reporter: Reporter) -> Self {
        Self { backends, reporter }
    }

    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|backend| backend.name()).collect()
    }

    /// Check every backend and upgrade the ones the user approves
    pub fn run_interactive_upgrade(&self, gate: &mut dyn Confirm) -> Vec<BackendOutcome> {
        self.backends
            .iter()
            .map(|backend| BackendOutcome {
                name: backend.name().to_string(),
                state: self.upgrade_backend(backend.as_ref(), gate),
            })
            .collect()
    }

    fn upgrade_backend(&self, backend: &dyn PackageManager, gate: &mut dyn Confirm) -> BackendState {
        let name = backend.name();
        self.reporter.header(&format!("Checking {}", name));

        if !backend.is_available() {
            self.reporter.info(&format!("{} not installed", name), BACKEND_LEVEL);
            return BackendState::Unavailable;
        }

        if !self.refresh(backend) {
            return BackendState::Failed;
        }

        let updatable = backend.list_updatable();
        if updatable.is_empty() {
            self.reporter.success("All packages are up to date", BACKEND_LEVEL);
            return BackendState::UpToDate;
        }

        self.reporter.info(
            &format!("{} package(s) to update: {}", updatable.len(), updatable.join(", ")),
            BACKEND_LEVEL,
        );

        if !gate.confirm(&format!("Upgrade {} package(s) with {}?", updatable.len(), name)) {
            self.reporter.info("Skipped", BACKEND_LEVEL);
            return BackendState::Skipped;
        }

        match backend.apply_upgrade() {
            Ok(()) => {
                self.reporter.success(&format!("{} upgraded", name), BACKEND_LEVEL);
                BackendState::Upgraded
            }
            Err(e) => {
                self.reporter.error(&format!("{} upgrade failed: {}", name, e), BACKEND_LEVEL);
                BackendState::Failed
            }
        }
    }

    /// Count pending updates per backend without upgrading anything.
    ///
    /// Backends with nothing pending are left out. A report nothing
    /// contributed to holds only the "not found" sentinel.
    pub fn run_count_only(&self, refresh_first: bool) -> RunReport {
        let mut report = RunReport::new();

        for backend in &self.backends {
            let name = backend.name();
            self.reporter.header(&format!("Checking {}", name));

            if !backend.is_available() {
                self.reporter.info(&format!("{} not installed", name), BACKEND_LEVEL);
                continue;
            }

            if refresh_first && !self.refresh(backend.as_ref()) {
                report.record(name, UpdateCount::Failed);
                continue;
            }

            match backend.query_updatable() {
                Ok(updatable) if updatable.is_empty() => {
                    self.reporter.success("All packages are up to date", BACKEND_LEVEL);
                }
                Ok(updatable) => {
                    self.reporter.info(
                        &format!("{} package(s) to update", updatable.len()),
                        BACKEND_LEVEL,
                    );
                    report.record(name, UpdateCount::Pending(updatable.len()));
                }
                Err(e) => {
                    self.reporter.error(&format!("Listing failed: {}", e), BACKEND_LEVEL);
                    report.record(name, UpdateCount::Failed);
                }
            }
        }

        if report.is_empty() {
            return RunReport::no_manager_found();
        }
        report
    }

    /// Refresh metadata; false means the backend's pass is over
    fn refresh(&self, backend: &dyn PackageManager) -> bool {
        match backend.refresh_metadata() {
            Ok(()) => true,
            Err(UpdateError::Unsupported { .. }) => {
                self.reporter.warning(
                    &format!("{} has no metadata refresh step, listing as is", backend.name()),
                    BACKEND_LEVEL,
                );
                true
            }
            Err(e) => {
                self.reporter.error(
                    &format!("Refreshing {} failed, skipping it: {}", backend.name(), e),
                    BACKEND_LEVEL,
                );
                false
            }
        }
    }
}
