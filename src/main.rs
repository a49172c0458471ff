//! Clearview Pressure Washing web backend.

use std::sync::Arc;

use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clearview_web::config::QuoteConfig;
use clearview_web::routing::{DistanceEvaluator, MatrixClient, MatrixConfig};
use clearview_web::{quote, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("clearview_web=info,tower_http=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    let config = Arc::new(QuoteConfig::from_env().context("invalid pricing configuration")?);

    let api_key = std::env::var("ROUTING_API_KEY").context("ROUTING_API_KEY must be set")?;
    let provider = MatrixClient::new(MatrixConfig {
        api_key,
        timeout_secs: config.provider_timeout_secs,
        ..MatrixConfig::default()
    })
    .context("failed to build routing provider client")?;

    let evaluator = Arc::new(DistanceEvaluator::new(config.clone(), Arc::new(provider)));

    let state = AppState { config, evaluator };

    let app = quote::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
