use crate::core::executor::Executor;
use crate::core::types::CommandSpec;
use crate::error::Result;
use crate::packages::parsers::parse_pacman_upgrades;
use crate::packages::traits::PackageManager;

pub struct PacmanManager {
    executor: Executor,
}

impl PacmanManager {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    // pacman -Qu exits 1 when nothing is pending
    fn list_command() -> CommandSpec {
        CommandSpec::new("pacman", ["-Qu"]).accepting(&[1])
    }
}

impl PackageManager for PacmanManager {
    fn name(&self) -> &'static str {
        "pacman"
    }

    fn is_available(&self) -> bool {
        self.executor.is_available("pacman")
    }

    fn refresh_metadata(&self) -> Result<()> {
        self.executor
            .stream(&CommandSpec::elevated("pacman", ["-Sy"]), None)
    }

    fn query_updatable(&self) -> Result<Vec<String>> {
        let output = self.executor.capture(&Self::list_command(), None)?;
        Ok(parse_pacman_upgrades(&output))
    }

    fn apply_upgrade(&self) -> Result<()> {
        self.executor
            .stream(&CommandSpec::elevated("pacman", ["-Su", "--noconfirm"]), None)
    }
}
