// src/bin/cli.rs
use amasift_compare::{cli, log};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log = log::init(true);

    let args = cli::Cli::parse();
    cli::run(args)
}
