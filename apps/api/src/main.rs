mod config;
mod documents;
mod errors;
mod llm_client;
mod parsing;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::parsing::ner::{build_recognizer, EntityRecognizer};
use crate::routes::build_router;
use crate::state::AppState;

/// Sample used to check the recognizer answers before accepting traffic.
const PROBE_TEXT: &str = "Jane Doe\nSoftware Engineer";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting résumé ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Entity recognizer is built once; a failure here stops startup.
    let recognizer =
        build_recognizer(&config, Handle::current()).context("Failed to initialise NER backend")?;
    if config.ner_startup_probe {
        probe_recognizer(recognizer.clone()).await?;
    }

    let state = AppState {
        config: config.clone(),
        recognizer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// One recognition call on a blocking thread, the same way requests use it.
async fn probe_recognizer(recognizer: Arc<dyn EntityRecognizer>) -> Result<()> {
    let entities = tokio::task::spawn_blocking(move || recognizer.find_entities(PROBE_TEXT))
        .await
        .context("NER probe task failed")?
        .context("NER startup probe failed")?;
    info!("NER startup probe succeeded ({} entities)", entities.len());
    Ok(())
}
