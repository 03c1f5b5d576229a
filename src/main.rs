//! Recserve server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recserve::api::{create_router, AppState};
use recserve::config::{AppConfig, LogFormat};
use recserve::resolver::create_resolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let node_id = resolve_node_id();
    tracing::info!(%node_id, "Starting recserve node");

    // Resolve backend configuration
    let resolver_config = config
        .resolver_runtime()
        .context("invalid resolver configuration")?;

    let resolver_backend = create_resolver(resolver_config).await?;
    let resolver: Arc<dyn recserve::resolver::Resolver> = Arc::from(resolver_backend);

    let router = create_router(AppState::new(resolver));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn resolve_node_id() -> String {
    std::env::var("RECSERVE_NODE_ID")
        .ok()
        .or_else(|| hostname::get().ok().and_then(|h| h.into_string().ok()))
        .unwrap_or_else(|| "recserve-node".to_string())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("recserve=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
