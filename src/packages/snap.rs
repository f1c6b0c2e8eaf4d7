use crate::core::executor::Executor;
use crate::core::types::CommandSpec;
use crate::error::Result;
use crate::packages::parsers::parse_snap_refresh_list;
use crate::packages::traits::PackageManager;

/// Snap packages. `snap refresh --list` queries the store directly, so
/// there is no separate refresh step.
pub struct SnapManager {
    executor: Executor,
}

impl SnapManager {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl PackageManager for SnapManager {
    fn name(&self) -> &'static str {
        "snap"
    }

    fn is_available(&self) -> bool {
        self.executor.is_available("snap")
    }

    fn query_updatable(&self) -> Result<Vec<String>> {
        let output = self
            .executor
            .capture(&CommandSpec::new("snap", ["refresh", "--list"]), None)?;
        Ok(parse_snap_refresh_list(&output))
    }

    fn apply_upgrade(&self) -> Result<()> {
        self.executor
            .stream(&CommandSpec::elevated("snap", ["refresh"]), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpdateError;
    use crate::test_support::{ScriptedRunner, failed, ok};
    use crate::ui::Reporter;
    use std::sync::Arc;

    fn snap(runner: &Arc<ScriptedRunner>) -> SnapManager {
        SnapManager::new(Executor::new(runner.clone(), Reporter::quiet(), true))
    }

    #[test]
    fn refresh_is_unsupported() {
        let runner = Arc::new(ScriptedRunner::new());
        let err = snap(&runner).refresh_metadata().unwrap_err();

        assert!(matches!(err, UpdateError::Unsupported { .. }));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn header_only_listing_is_empty() {
        let runner = Arc::new(ScriptedRunner::new().respond("snap refresh --list", ok("All snaps up to date.\n")));
        assert!(snap(&runner).list_updatable().is_empty());
    }

    #[test]
    fn failed_listing_is_empty() {
        let runner = Arc::new(ScriptedRunner::new().respond("snap refresh --list", failed(1, "cannot communicate with server")));
        assert!(snap(&runner).list_updatable().is_empty());
    }

    #[test]
    fn upgrade_refreshes_all_snaps() {
        let runner = Arc::new(ScriptedRunner::new().respond("sudo snap refresh", ok("")));
        snap(&runner).apply_upgrade().expect("upgrade");
        assert_eq!(runner.commands(), vec!["sudo snap refresh"]);
    }
}
