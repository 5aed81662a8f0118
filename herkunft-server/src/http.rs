use axum::{response::Html, routing::get, Json, Router};
use eyre::Context;
use herkunft::StoredReferral;
use herkunft_config::server;
use herkunft_rules::RefererTable;
use std::future::Future;
use tokio::net::TcpListener;
use tower_herkunft::{HerkunftLayer, OriginalReferrer};
use tower_http::trace::TraceLayer;

const INDEX: &str = r#"<!DOCTYPE html>
<html>
  <head><title>herkunft</title></head>
  <body>
    <h1>Welcome</h1>
    <p>Your first visit has been noted. Have a look at <a href="/pricing">our pricing</a>.</p>
    <p><a href="/referrer">Where did you come from?</a></p>
  </body>
</html>
"#;

const PRICING: &str = r#"<!DOCTYPE html>
<html>
  <head><title>herkunft - pricing</title></head>
  <body>
    <h1>Pricing</h1>
    <p>Internal navigation doesn't change your attribution. <a href="/">Back</a></p>
  </body>
</html>
"#;

async fn index() -> Html<&'static str> {
    Html(INDEX)
}

async fn pricing() -> Html<&'static str> {
    Html(PRICING)
}

async fn referrer(referrer: OriginalReferrer) -> Json<StoredReferral> {
    Json((*referrer).clone())
}

pub fn create_router(layer: HerkunftLayer<RefererTable>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/pricing", get(pricing))
        .route("/referrer", get(referrer))
        .layer(layer)
        .layer(TraceLayer::new_for_http())
}

#[instrument(skip_all, fields(port = %server_config.port))]
pub async fn run<F>(
    layer: HerkunftLayer<RefererTable>,
    server_config: &server::Configuration,
    shutdown_signal: F,
) -> eyre::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(("0.0.0.0", server_config.port))
        .await
        .wrap_err("Failed to bind the HTTP listener")?;

    info!("listening for requests");

    axum::serve(listener, create_router(layer))
        .with_graceful_shutdown(shutdown_signal)
        .await
        .wrap_err("HTTP server failed")
}
