use crate::core::executor::Executor;
use crate::core::types::CommandSpec;
use crate::error::Result;
use crate::packages::parsers::parse_apt_upgradable;
use crate::packages::traits::PackageManager;

/// Debian/Ubuntu apt
pub struct AptManager {
    executor: Executor,
}

impl AptManager {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    fn list_command() -> CommandSpec {
        CommandSpec::new("apt", ["list", "--upgradable"])
    }

    // The user already confirmed through the prompt, so apt's own is skipped
    fn upgrade_commands() -> Vec<CommandSpec> {
        vec![
            CommandSpec::elevated("apt", ["upgrade", "-y"]),
            CommandSpec::elevated("apt", ["dist-upgrade", "-y"]),
            CommandSpec::elevated("apt", ["autoremove", "-y"]),
            CommandSpec::elevated("apt", ["autoclean", "-y"]),
        ]
    }
}

impl PackageManager for AptManager {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn is_available(&self) -> bool {
        self.executor.is_available("apt")
    }

    fn refresh_metadata(&self) -> Result<()> {
        self.executor
            .stream(&CommandSpec::elevated("apt", ["update"]), None)
    }

    fn query_updatable(&self) -> Result<Vec<String>> {
        let output = self.executor.capture(&Self::list_command(), None)?;
        Ok(parse_apt_upgradable(&output))
    }

    fn apply_upgrade(&self) -> Result<()> {
        for command in Self::upgrade_commands() {
            self.executor.stream(&command, None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedRunner, failed, ok};
    use crate::ui::Reporter;
    use std::sync::Arc;

    fn apt(runner: &Arc<ScriptedRunner>) -> AptManager {
        AptManager::new(Executor::new(runner.clone(), Reporter::quiet(), true))
    }

    #[test]
    fn lists_upgradable_packages() {
        let runner = Arc::new(ScriptedRunner::new().respond(
            "apt list --upgradable",
            ok("Listing...\nvim/jammy-updates 2:8.2 amd64 [upgradable from: 2:8.1]\ncurl/jammy-security 7.81 amd64\n"),
        ));

        assert_eq!(apt(&runner).list_updatable(), vec!["vim", "curl"]);
    }

    #[test]
    fn failed_listing_is_empty() {
        let runner = Arc::new(ScriptedRunner::new().respond("apt list --upgradable", failed(100, "E: lock")));
        let apt = apt(&runner);

        assert!(apt.list_updatable().is_empty());
        assert!(apt.query_updatable().is_err());
    }

    #[test]
    fn refresh_runs_privileged_update() {
        let runner = Arc::new(ScriptedRunner::new().respond("sudo apt update", ok("")));
        apt(&runner).refresh_metadata().expect("refresh");
        assert_eq!(runner.commands(), vec!["sudo apt update"]);
    }

    #[test]
    fn upgrade_runs_full_sequence() {
        let runner = Arc::new(
            ScriptedRunner::new()
                .respond("sudo apt upgrade -y", ok(""))
                .respond("sudo apt dist-upgrade -y", ok(""))
                .respond("sudo apt autoremove -y", ok(""))
                .respond("sudo apt autoclean -y", ok("")),
        );

        apt(&runner).apply_upgrade().expect("upgrade");
        assert_eq!(
            runner.commands(),
            vec![
                "sudo apt upgrade -y",
                "sudo apt dist-upgrade -y",
                "sudo apt autoremove -y",
                "sudo apt autoclean -y",
            ]
        );
    }

    #[test]
    fn upgrade_stops_at_first_failure() {
        let runner = Arc::new(ScriptedRunner::new().respond("sudo apt upgrade -y", failed(100, "")));

        assert!(apt(&runner).apply_upgrade().is_err());
        assert_eq!(runner.commands(), vec!["sudo apt upgrade -y"]);
    }
}
