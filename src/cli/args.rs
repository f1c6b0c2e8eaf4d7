use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "omniupdate",
    about = "Update every package manager on the system in one pass",
    long_about = "Checks apt, snap, pip2, pip3, pacman and a farm of git repositories for \
                  pending updates and upgrades the ones you confirm",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    /// Only count pending updates and print a one-line summary
    #[arg(short = 'c', long)]
    pub count_updatable: bool,

    /// Quiet mode (the summary line is still printed)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Allow sudo commands while counting
    #[arg(long)]
    pub allow_sudo: bool,

    /// Count without refreshing package metadata first
    #[arg(long, requires = "count_updatable")]
    pub no_refresh: bool,

    /// Echo every command before it runs
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base directory of the git repository farm
    #[arg(long, value_name = "DIR")]
    pub repo_dir: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from(["omniupdate", "-c", "-q", "--allow-sudo"]).expect("parse");
        assert!(cli.count_updatable);
        assert!(cli.quiet);
        assert!(cli.allow_sudo);
        assert!(!cli.no_refresh);
    }

    #[test]
    fn no_refresh_requires_count_mode() {
        assert!(Cli::try_parse_from(["omniupdate", "--no-refresh"]).is_err());
        assert!(Cli::try_parse_from(["omniupdate", "-c", "--no-refresh"]).is_ok());
    }

    #[test]
    fn completions_take_a_shell() {
        let cli = Cli::try_parse_from(["omniupdate", "--completions", "bash"]).expect("parse");
        assert_eq!(cli.completions, Some(Shell::Bash));
        assert!(Cli::try_parse_from(["omniupdate", "--completions", "tcsh"]).is_err());
    }
}
