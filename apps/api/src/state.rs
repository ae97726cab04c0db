use std::sync::Arc;

use crate::analysis::engine::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Analysis pipeline. The linguistic backend inside it is selected once
    /// at startup via ANALYZER_MODE and never changes afterwards.
    pub engine: Arc<MatchEngine>,
}
