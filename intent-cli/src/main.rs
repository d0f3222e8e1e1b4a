//! Intent CLI binary

use clap::Parser;
use intent_cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
