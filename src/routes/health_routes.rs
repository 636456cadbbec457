use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::database::connection::ping;
use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Siempre responde 200; `database` indica si MySQL contesta
async fn health(State(state): State<AppState>) -> Json<Value> {
    let database = match ping(&state.pool).await {
        Ok(()) => "up",
        Err(_) => "down",
    };

    Json(json!({
        "status": "ok",
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
