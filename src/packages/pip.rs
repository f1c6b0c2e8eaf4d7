use crate::core::executor::Executor;
use crate::core::types::CommandSpec;
use crate::error::Result;
use crate::packages::parsers::parse_pip_outdated;
use crate::packages::traits::PackageManager;

/// pip, one instance per interpreter generation (`pip2`, `pip3`)
pub struct PipManager {
    executor: Executor,
    executable: &'static str,
}

impl PipManager {
    pub fn pip2(executor: Executor) -> Self {
        Self {
            executor,
            executable: "pip2",
        }
    }

    pub fn pip3(executor: Executor) -> Self {
        Self {
            executor,
            executable: "pip3",
        }
    }
}

impl PackageManager for PipManager {
    fn name(&self) -> &'static str {
        self.executable
    }

    fn is_available(&self) -> bool {
        self.executor.is_available(self.executable)
    }

    fn query_updatable(&self) -> Result<Vec<String>> {
        let output = self.executor.capture(
            &CommandSpec::new(self.executable, ["list", "--outdated", "--format=columns"]),
            None,
        )?;
        Ok(parse_pip_outdated(&output))
    }

    /// pip has no "upgrade everything", so the outdated set is listed again
    /// and passed to a single install
    fn apply_upgrade(&self) -> Result<()> {
        let outdated = self.query_updatable()?;
        if outdated.is_empty() {
            return Ok(());
        }

        let command = CommandSpec::elevated(self.executable, ["install", "--upgrade"]).with_args(outdated);
        self.executor.stream(&command, None)
    }
}
