mod cli;
mod header;
mod rom;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rom::Rom;

fn main() -> Result<()> {
    // Start logger
    env_logger::init();

    // Read command line arguments
    let args = cli::Args::parse();
    debug!("{:?}", args);

    // Probe the ROM, falling back to an empty image if it can't be sized
    let rom = Rom::open(&args.rom).context("Failed to write to stdout")?;

    // Write the header
    header::convert(&rom, &args.header)
        .with_context(|| format!("Failed to write header {:?}", args.header))?;

    Ok(())
}
