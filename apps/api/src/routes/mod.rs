pub mod health;
pub mod reference;

use axum::{
    routing::{get, post},
    Router,
};

use crate::explainer::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(reference::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/standards", get(reference::list_standards))
        .route("/api/examples", get(reference::list_examples))
        .route("/api/glossary", get(reference::list_glossary))
        .route("/api/explanation", post(handlers::handle_explanation))
        .route("/api/feedback", post(handlers::handle_feedback))
        .route("/api/ask", post(handlers::handle_ask))
        .with_state(state)
}
