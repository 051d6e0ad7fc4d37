use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use variations_api::config::{LogFormat, ServerConfig};
use variations_api::state::AppState;
use variations_core::config::StoreEnv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let store_env = StoreEnv::from_env();
    match &store_env {
        Ok(env) => tracing::info!(
            region = %env.default_region,
            table = %env.product_variations_table,
            "Loaded store configuration"
        ),
        Err(err) => tracing::warn!(
            error = %err,
            "Store configuration incomplete; batch requests will be rejected"
        ),
    }

    let region = store_env.as_ref().ok().map(|env| env.default_region.as_str());
    let executor = variations_db::connect(region).await;
    tracing::info!("DynamoDB client created");

    // --- App state ---
    let addr = config.bind_addr()?;
    let state = AppState {
        store_env: store_env.map(Arc::new),
        executor: Arc::new(executor),
    };

    let app = variations_api::build_app(state);

    tracing::info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "variations_api=debug,variations_db=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
