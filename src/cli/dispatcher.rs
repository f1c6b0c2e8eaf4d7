//! Command dispatcher
//!
//! Resolves settings and routes the parsed flags to a command.

use crate::cli::args::Cli;
use crate::commands;
use crate::commands::count::CountOptions;
use crate::config::Settings;
use crate::error::Result;
use crate::ui::Reporter;

pub fn dispatch(args: &Cli, reporter: Reporter) -> Result<()> {
    if let Some(shell) = args.completions {
        return commands::completions::run(shell);
    }

    let settings = Settings::load(args.config.as_deref())?.with_repo_dir(args.repo_dir.clone());

    if args.count_updatable {
        commands::count::run(
            &settings,
            reporter,
            CountOptions {
                refresh: !args.no_refresh,
                allow_sudo: args.allow_sudo,
            },
        )
    } else {
        commands::upgrade::run(&settings, reporter)
    }
}
