//! Situation Update Resolver - Main Entry Point

use clap::Parser;
use situation_cli::{init_logging, run, Args};
use situation_resolver::ResolverConfig;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = ResolverConfig::load(args.config.as_deref())?;
    init_logging(&config.log_level);

    info!("=== Situation Update Resolver v{} ===", env!("CARGO_PKG_VERSION"));

    let output = run(&args, config)?;
    println!("{}", output);

    Ok(())
}
