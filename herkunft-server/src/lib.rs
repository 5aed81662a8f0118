#![forbid(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, forbidden_lint_groups)]

#[macro_use]
extern crate tracing;

use eyre::Context;
use herkunft_config::{referrer, Configuration};
use herkunft_rules::RefererTable;
use tokio::fs;
use tower_herkunft::HerkunftLayer;

pub mod http;
pub mod signal;

/// Load the referer table from the configured rules file, or fall back to the embedded one
pub async fn initialise_engine(config: &referrer::Configuration) -> eyre::Result<RefererTable> {
    let Some(ref path) = config.rules_file else {
        return Ok(RefererTable::default());
    };

    let content = fs::read_to_string(path.as_str())
        .await
        .wrap_err_with(|| format!("Failed to read the referer rules from {path}"))?;

    RefererTable::from_toml(&content).wrap_err("Failed to parse the referer rules")
}

pub async fn initialise_layer(config: &Configuration) -> eyre::Result<HerkunftLayer<RefererTable>> {
    let engine = initialise_engine(&config.referrer).await?;
    info!(domains = engine.len(), "loaded referer table");

    let referrer_config = herkunft::Config::from_configuration(&config.referrer)
        .wrap_err("Invalid referrer configuration")?;

    HerkunftLayer::with_default_scheme(
        referrer_config,
        engine,
        config.server.default_scheme.clone(),
    )
    .wrap_err("Failed to construct the attribution layer")
}
