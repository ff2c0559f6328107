//! Axum-based HTTP gateway exposing the classification endpoints.
//!
//! Contract: the classification endpoints always answer HTTP 200 with a JSON
//! body - an internal failure degrades to an empty result (`{"items": []}` /
//! `{"intent": "none"}`), never an error status. Callers treat an empty
//! result as "no match", not as a transport failure.

mod handlers;

use handlers::{handle_ask, handle_classify_multi, handle_classify_single, handle_health};

use crate::config::Config;
use crate::intent::IntentResolver;
use crate::oracle::RemoteClassifier;
use crate::reply::ReplyPipeline;
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Maximum request body size (64KB) - prevents memory exhaustion
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s) - the upper bound on a full classification chain
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<RemoteClassifier>,
    pub pipeline: Arc<ReplyPipeline>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let classifier = Arc::new(RemoteClassifier::from_config(&config.classifier));
        let resolver = IntentResolver::with_default_chain(Arc::clone(&classifier));
        let pipeline = Arc::new(ReplyPipeline::new(resolver, config.content_path.clone()));
        Self {
            classifier,
            pipeline,
        }
    }
}

/// Request body shared by all classification endpoints.
#[derive(serde::Deserialize)]
pub struct QueryBody {
    #[serde(default)]
    pub query: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/classify-multi", post(handle_classify_multi))
        .route("/api/classify", post(handle_classify_single))
        .route("/api/ask", post(handle_ask))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the HTTP gateway.
pub async fn run_gateway(host: &str, port: u16, config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    run_gateway_with_listener(host, listener, config).await
}

/// Run the HTTP gateway from a pre-bound listener (used by tests to bind
/// port 0).
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Config,
) -> Result<()> {
    let actual_port = listener.local_addr()?.port();
    let state = AppState::from_config(&config);

    if state.classifier.is_fallback_only() {
        tracing::warn!("gateway starting without an oracle key; heuristic classification only");
    }
    tracing::info!("gateway listening on {host}:{actual_port}");

    let app = router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
