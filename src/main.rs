use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod dataset;
mod domain;
mod logging;
mod services;

use cli::Cli;
use commands::{handle_evacuation_commands, handle_monitoring_commands};
use services::config::load_config;

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    let data = dataset::load_dataset(cli.dataset.as_deref())?;
    let warnings = dataset::validate(&data)
        .with_context(|| format!("dataset {} failed validation", data.name))?;
    for w in &warnings {
        tracing::warn!("{}", w);
    }
    tracing::debug!(
        dataset = %data.name,
        routes = data.routes.len(),
        lakes = data.lakes.len(),
        "dataset loaded"
    );

    if handle_evacuation_commands(&cli, &cfg, &data)? {
        return Ok(());
    }
    handle_monitoring_commands(&cli, &cfg, &data, &warnings)?;
    Ok(())
}
