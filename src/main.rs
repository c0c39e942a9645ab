mod app;
mod cli;
mod config;
mod location;
mod logging;
mod paths;
mod sidecar;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    app::run(cli)
}
