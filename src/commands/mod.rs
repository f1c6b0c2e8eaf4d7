pub mod completions;
pub mod count;
pub mod upgrade;

use crate::config::Settings;
use crate::core::executor::Executor;
use crate::core::orchestrator::Orchestrator;
use crate::packages::BackendRegistry;
use crate::system::SystemRunner;
use crate::ui::Reporter;
use std::sync::Arc;

/// Wire the real process runner through every enabled backend
fn build_orchestrator(settings: &Settings, reporter: Reporter, allow_elevated: bool) -> Orchestrator {
    let executor = Executor::new(Arc::new(SystemRunner), reporter, allow_elevated);
    let managers = BackendRegistry::default().create_managers(settings, &executor);
    Orchestrator::new(managers, reporter)
}
