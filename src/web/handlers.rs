//! REST API handlers
//!
//! Orchestrates validator -> selector -> session store for each request.
//! Handlers are generic over the injected store so tests can swap in mocks.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Json;
use serde_json::{Value, json};
use tracing::{error, info, warn};

use crate::core::selector;
use crate::error::{OptimizerError, OptimizerResult};
use crate::traits::SessionStore;
use crate::types::SessionRecord;
use crate::validation;

/// Liveness marker; the body text is part of the monitoring contract.
pub async fn health_check() -> &'static str {
    "🟢 Shopping Cart Optimizer API is running."
}

/// `POST /optimize`: validate, select, record, respond.
///
/// The body is taken raw so every failure, including a body that is not
/// JSON at all, produces the `{"error": ...}` shape. A non-JSON body
/// carries no budget and falls out of validation with the budget message.
pub async fn optimize<S>(
    State(store): State<Arc<S>>,
    body: Bytes,
) -> OptimizerResult<Json<SessionRecord>>
where
    S: SessionStore,
{
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    info!("Incoming request: {payload}");

    let request = validation::validate_request(&payload).map_err(|e| {
        warn!("Validation failed: {e}");
        e
    })?;

    let selection = selector::select(&request.items, request.budget);
    let record = SessionRecord::new(request.budget, selection);

    info!(
        "Session {} optimized: {} items, Value={}, Cost={}",
        record.session_id, record.count, record.total_value, record.total_price
    );

    store.save_session(&record).await.map_err(|e| {
        error!("Unexpected error during optimization: {e}");
        OptimizerError::InternalError(e.to_string())
    })?;

    Ok(Json(record))
}

/// `GET /history`: past sessions for the implicit guest user, append order.
pub async fn history<S>(State(store): State<Arc<S>>) -> OptimizerResult<Json<Value>>
where
    S: SessionStore,
{
    let records = store.load_history().await.map_err(|e| {
        error!("Failed to retrieve history: {e}");
        OptimizerError::HistoryUnavailable
    })?;

    Ok(Json(json!({ "history": records })))
}
