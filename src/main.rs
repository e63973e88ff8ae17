//! Deconflict - Git conflict marker cleaner
//!
//! A command line tool that scans a Dart source tree and removes conflict
//! markers left behind by incomplete merges or reverts, keeping the HEAD
//! side of each conflict.

use clap::Parser;

mod cli;
mod commands;
mod discovery;
mod error;
mod operations;
mod stripper;
mod ui;

use cli::{CleanArgs, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Running without a subcommand cleans the default source tree, matching
    // the original zero-argument invocation.
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Clean(CleanArgs::default()));

    let result = match command {
        Commands::Clean(args) => commands::clean::run(cli.project, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
