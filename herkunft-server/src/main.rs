use clap::Parser;
use color_eyre::eyre;
use herkunft_config::Configuration;
use std::path::PathBuf;

/// Demo site that records where its visitors came from
#[derive(Parser)]
#[command(about, author, version)]
struct Args {
    /// Path to the configuration file
    #[clap(long, short)]
    config: PathBuf,
}

async fn boot() -> eyre::Result<()> {
    let args = Args::parse();
    let config = Configuration::load(args.config).await?;
    herkunft_observability::initialise(&config)?;

    let layer = herkunft_server::initialise_layer(&config).await?;

    herkunft_server::http::run(layer, &config.server, herkunft_server::signal::shutdown()).await
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(boot())
}
