//! Almanac CLI Application
//!
//! Command-line interface for the almanac year outline generator.

mod args;
mod cli;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args { config, command } = Args::parse();

    info!("Almanac started");

    match command {
        Some(Generate(args)) => Cli::new(config.as_deref())?.generate(args),
        Some(Defaults) => Cli::new(config.as_deref())?.defaults(),
        Some(Schema) => Cli::schema(),
        Some(Iso { date }) => Cli::iso(date),
        None => Cli::new(config.as_deref())?.generate(Default::default()),
    }
}
