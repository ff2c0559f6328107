use super::{AppState, QueryBody};
use crate::intent::ClassificationItem;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
};

/// Shown in place of cards when the profile document cannot be read at
/// reply time; renders as plain text.
const CONTENT_UNAVAILABLE: &str = "Unable to load data locally.";

/// GET /health
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let mode = if state.classifier.is_fallback_only() {
        "fallback-only"
    } else {
        "remote"
    };
    Json(serde_json::json!({
        "status": "ok",
        "classifier": mode,
    }))
}

/// POST /api/classify-multi - ordered `{natural, card}` pairs.
///
/// Internally falls back to the single-intent call when the multi-card call
/// yields nothing. Always 200; every failure mode is `{"items": []}`.
pub(super) async fn handle_classify_multi(
    State(state): State<AppState>,
    body: Result<Json<QueryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(query) = extract_query(body) else {
        return Json(serde_json::json!({"items": []}));
    };

    let mut items = state.classifier.classify(&query).await;
    if items.is_empty() {
        if let Some(category) = state.classifier.classify_one(&query).await {
            items.push(ClassificationItem::bare(category));
        }
    }

    Json(serde_json::json!({ "items": items }))
}

/// POST /api/classify - one bare category, or `"none"`.
pub(super) async fn handle_classify_single(
    State(state): State<AppState>,
    body: Result<Json<QueryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(query) = extract_query(body) else {
        return Json(serde_json::json!({"intent": "none"}));
    };

    let intent = match state.classifier.classify_one(&query).await {
        Some(category) => category.to_string(),
        None => "none".to_string(),
    };
    Json(serde_json::json!({ "intent": intent }))
}

/// POST /api/ask - the full pipeline: an encoded transcript message.
///
/// A content-document failure degrades to a plain-text message, still 200.
pub(super) async fn handle_ask(
    State(state): State<AppState>,
    body: Result<Json<QueryBody>, JsonRejection>,
) -> impl IntoResponse {
    let Some(query) = extract_query(body) else {
        return Json(serde_json::json!({"message": CONTENT_UNAVAILABLE}));
    };

    let message = match state.pipeline.answer(&query).await {
        Ok(encoded) => encoded,
        Err(error) => {
            tracing::warn!(%error, "reply pipeline failed; degrading to plain text");
            CONTENT_UNAVAILABLE.to_string()
        }
    };
    Json(serde_json::json!({ "message": message }))
}

/// Pull a usable query out of the request, treating malformed JSON and
/// missing/empty queries alike as "nothing to classify".
fn extract_query(body: Result<Json<QueryBody>, JsonRejection>) -> Option<String> {
    match body {
        Ok(Json(QueryBody { query: Some(q) })) if !q.trim().is_empty() => Some(q),
        _ => None,
    }
}
