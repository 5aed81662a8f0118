#![forbid(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, forbidden_lint_groups)]

use eyre::Context;
use herkunft_config::Configuration;
use std::env;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    layer::SubscriberExt,
    Layer, Registry,
};

/// `INFO` everywhere, plus the middleware's skip decisions in verbose mode
fn default_targets(config: &Configuration) -> Targets {
    let targets = Targets::default().with_default(LevelFilter::INFO);
    if config.referrer.verbose {
        targets.with_target("tower_herkunft", LevelFilter::DEBUG)
    } else {
        targets
    }
}

fn env_targets() -> eyre::Result<Targets> {
    let targets = env::var("RUST_LOG")?;
    targets.parse().context("Failed to parse RUST_LOG value")
}

pub fn initialise(config: &Configuration) -> eyre::Result<()> {
    let env_filter = env_targets().unwrap_or_else(|_| default_targets(config));

    let subscriber = Registry::default()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .context("Couldn't install the global tracing subscriber")?;

    Ok(())
}
