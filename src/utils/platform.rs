use crate::core::types::CommandSpec;
use crate::error::Result;
use std::process::Command;

/// Build a direct program invocation in a platform-aware way.
///
/// - Unix: `program args...` or `sudo program args...`
/// - Windows: `program args...` (elevated execution not supported)
pub fn build_program_command(spec: &CommandSpec) -> Result<Command> {
    #[cfg(unix)]
    {
        let cmd = if spec.is_elevated() {
            let mut c = Command::new("sudo");
            c.arg(spec.program());
            c.args(spec.args());
            c
        } else {
            let mut c = Command::new(spec.program());
            c.args(spec.args());
            c
        };

        Ok(cmd)
    }

    #[cfg(not(unix))]
    {
        if spec.is_elevated() {
            return Err(crate::error::UpdateError::SpawnFailed {
                command: spec.to_string(),
                reason: "Elevated execution is only implemented on Unix".to_string(),
            });
        }

        let mut cmd = Command::new(spec.program());
        cmd.args(spec.args());
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_program_non_elevated_works() {
        let spec = CommandSpec::new("echo", ["ok"]);
        let cmd = build_program_command(&spec).expect("build command");
        assert_eq!(cmd.get_program(), "echo");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), ["ok"]);
    }

    #[cfg(unix)]
    #[test]
    fn build_program_elevated_prefixes_sudo() {
        let spec = CommandSpec::elevated("apt", ["update"]);
        let cmd = build_program_command(&spec).expect("build command");
        assert_eq!(cmd.get_program(), "sudo");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), ["apt", "update"]);
    }
}
