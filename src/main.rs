use crate::args::Args;
use crate::service::probe_service::Probe;
use anyhow::Context;
use clap::Parser;
use log::debug;
use std::io;

mod args;
mod config;
mod logging;
mod model;
mod report;
mod service;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize the logging system with the specified debug level
    logging::init(args.debug)?;
    debug!("debug mode enabled");

    let config = config::load_config(&args).context("Failed to load configuration")?;
    debug!("Target: {:?}", config.target);

    let probe = Probe::new(config.target)?;

    // Handled transport failures are printed, not returned, so they still exit 0.
    probe.run(&args.device, &mut io::stdout()).await
}
