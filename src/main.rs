mod check_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod signal_io;
mod transform_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::OrthoConfig;
use crate::transform_cmd::Direction;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = OrthoConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Analyze(args) => transform_cmd::run(args, &config, Direction::Analyze),
        Command::Synthesize(args) => transform_cmd::run(args, &config, Direction::Synthesize),
        Command::Heatmap(args) => transform_cmd::run_heatmap(args, &config),
        Command::Check(args) => check_cmd::run(args, &config),
        Command::Families => {
            for name in ortho_wavelet::registry().names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}
