use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use plausibleio_api::PlausibleClient;
use plausibleio_core::labels::DefaultLabels;
use plausibleio_metadata::InMemoryConfigurationStore;
use plausibleio_server::state::AppState;

/// `plausibleio health`: liveness probe for Docker HEALTHCHECK.
///
/// Calls `GET http://localhost:$PLAUSIBLEIO_PORT/health`.
/// Exits 0 if the server responds with HTTP 200, exits 1 otherwise.
fn run_health_check() -> ! {
    let port = std::env::var("PLAUSIBLEIO_PORT").unwrap_or_else(|_| "3000".to_string());
    let url = format!("http://localhost:{}/health", port);
    match ureq::get(&url).call() {
        Ok(resp) if resp.status() == 200 => std::process::exit(0),
        _ => std::process::exit(1),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.get(1).map(|s| s.as_str()) == Some("health") {
        run_health_check();
    }
    // Level controlled via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plausibleio=info".parse()?),
        )
        .json()
        .init();

    let cfg = plausibleio_core::config::Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    if cfg.site_ids.is_empty() {
        tracing::warn!("PLAUSIBLEIO_SITE_IDS is empty; widget requests will return 404");
    }
    if cfg.api_key.is_empty() {
        tracing::warn!("PLAUSIBLEIO_API_KEY is empty; the analytics API will reject requests");
    }

    let client = PlausibleClient::from_config(&cfg);
    let state = Arc::new(AppState::new(
        Arc::new(client),
        Arc::new(DefaultLabels::new()),
        Arc::new(InMemoryConfigurationStore::with_capacity(cfg.max_users)),
        cfg.clone(),
    ));

    let addr = format!("0.0.0.0:{}", cfg.port);
    let app = plausibleio_server::app::build_app(state);

    info!(
        port = cfg.port,
        api_url = %cfg.api_url,
        sites = cfg.site_ids.len(),
        "plausibleio listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}
