mod cli;
mod logging;
mod month_cmd;
mod terms_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Month(args) => month_cmd::run(args),
        Command::Terms(args) => terms_cmd::run(args),
        Command::Year(args) => year_cmd::run(args),
    }
}
