// graft-cli/src/main.rs
//
// Entry point for the graft binary: initializes logging, parses
// arguments, dispatches to the command implementations, and maps
// failures to exit codes.

use clap::Parser;
use env_logger::Env;
use graft_cli::{Cli, Commands, run_check, run_info, run_new};
use owo_colors::OwoColorize;
use std::process;

fn main() {
    // RUST_LOG=debug also surfaces ffprobe invocations from graft-core.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info(args) => run_info(args),
        Commands::Check(args) => run_check(args),
        Commands::New(args) => run_new(args),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}
