mod analysis;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::engine::MatchEngine;
use crate::analysis::linguistics::build_analyzer;
use crate::analysis::vocab::Vocabularies;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparsable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Keymatch API v{}", env!("CARGO_PKG_VERSION"));

    // Build the shared vocabularies (immutable for the process lifetime)
    let vocab = Arc::new(Vocabularies::builtin());
    info!("Vocabularies loaded");

    // Select the linguistic analyzer once, at startup
    let analyzer = build_analyzer(config.analyzer_mode);
    info!("Linguistic analyzer initialized (backend: {})", analyzer.name());

    let engine = MatchEngine::new(analyzer, vocab, config.extraction_options());
    info!(
        "Match engine ready (top_keywords: {}, min_word_length: {})",
        config.top_keywords, config.min_word_length
    );

    // Build app state
    let state = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
