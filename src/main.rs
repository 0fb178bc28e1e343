use std::io;

use anyhow::Result;
use clap::Parser;
use discount_pricing::{
    cli::{Args, CliApp, Scenario},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env();

    // Logs go to stderr; stdout carries the price report only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter(args.verbose)))
        .with_writer(io::stderr)
        .init();

    for warning in &config.warnings {
        tracing::warn!("Configuration: {}", warning);
    }

    tracing::info!(
        "Discount pricing starting in {} environment",
        config.environment
    );

    let app = CliApp::new(Scenario::sample());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    app.run(&mut out).map_err(|e| {
        tracing::error!("Discount pricing failed: {}", e);
        e
    })?;

    tracing::info!("Discount pricing finished");
    Ok(())
}
