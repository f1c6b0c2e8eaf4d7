pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod packages;
pub mod system;
pub mod traits;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_support;

use clap::Parser;
use std::process::exit;

/// Run omniupdate CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    let args = cli::args::Cli::parse();
    let reporter = ui::Reporter::new(!args.quiet, args.verbose);

    // 1. Children share the terminal's process group and get SIGINT themselves
    ctrlc::set_handler(move || {
        eprintln!();
        reporter.warning("Interrupted by user", 0);
        exit(0);
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Run
    if let Err(e) = cli::dispatcher::dispatch(&args, reporter) {
        reporter.error(&format!("{}", e), 0);
        exit(1);
    }
}
