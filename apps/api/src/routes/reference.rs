//! Bulk read-only endpoints over the reference store.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::models::{Example, GlossaryEntry, Standard};
use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Islamic Finance Standards API" }))
}

/// GET /api/standards
pub async fn list_standards(State(state): State<AppState>) -> Json<Vec<Standard>> {
    Json(state.store.standards().to_vec())
}

/// GET /api/examples
pub async fn list_examples(State(state): State<AppState>) -> Json<Vec<Example>> {
    Json(state.store.examples().to_vec())
}

/// GET /api/glossary
pub async fn list_glossary(State(state): State<AppState>) -> Json<Vec<GlossaryEntry>> {
    Json(state.store.glossary().to_vec())
}
