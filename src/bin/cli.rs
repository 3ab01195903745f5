// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::eyre;
use genshin_stickers::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    log::init(args.verbose).map_err(|e| eyre!("logging setup failed: {e}"))?;

    cli::run(args)?;
    Ok(())
}
