//! Axum route handlers for the explanation, feedback, and ask endpoints.
//!
//! Each handler is one linear pipeline: store lookup → prompt composition →
//! completion call → response shaping. Generation failures degrade to the
//! client's sentinel text instead of failing the request, so callers always
//! receive a readable body once the lookups succeed.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::explainer::prompts::{
    explanation_prompt, feedback_prompt, question_prompt, EXPLANATION_PARAMS, FEEDBACK_PARAMS,
    QUESTION_PARAMS,
};
use crate::models::Language;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExplanationRequest {
    pub standard_id: String,
    pub scenario: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct ExplanationResponse {
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub standard_id: String,
    pub user_solution: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
    pub expert_solution: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/explanation
///
/// Explains the accounting treatment of the caller-supplied scenario under
/// the named standard. Both the standard and an example for it must exist,
/// even though the prompt uses the caller's scenario text.
pub async fn handle_explanation(
    State(state): State<AppState>,
    Json(request): Json<ExplanationRequest>,
) -> Result<Json<ExplanationResponse>, AppError> {
    let standard = state
        .store
        .find_standard(&request.standard_id)
        .ok_or_else(|| AppError::NotFound("Standard not found".to_string()))?;
    state
        .store
        .find_example(&request.standard_id)
        .ok_or_else(|| AppError::NotFound("Example not found".to_string()))?;

    let prompt = explanation_prompt(
        standard.title(request.language),
        &request.scenario,
        request.language,
    );

    let explanation = state
        .llm
        .generate(&prompt, EXPLANATION_PARAMS)
        .await
        .unwrap_or_else(|e| e.degraded_text());

    Ok(Json(ExplanationResponse { explanation }))
}

/// POST /api/feedback
///
/// Two sequential completion calls: first an expert solution over the
/// example's scenario, then feedback comparing the user's solution to it.
/// A failed expert call degrades to its sentinel text, which still feeds
/// the comparison call verbatim rather than aborting.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let standard = state
        .store
        .find_standard(&request.standard_id)
        .ok_or_else(|| AppError::NotFound("Standard not found".to_string()))?;
    let example = state
        .store
        .find_example(&request.standard_id)
        .ok_or_else(|| AppError::NotFound("Example not found".to_string()))?;

    let scenario = example.scenario(request.language);

    let expert_prompt = explanation_prompt(
        standard.title(request.language),
        scenario,
        request.language,
    );
    let expert_solution = state
        .llm
        .generate(&expert_prompt, EXPLANATION_PARAMS)
        .await
        .unwrap_or_else(|e| e.degraded_text());

    let prompt = feedback_prompt(
        scenario,
        &request.user_solution,
        &expert_solution,
        request.language,
    );
    let feedback = state
        .llm
        .generate(&prompt, FEEDBACK_PARAMS)
        .await
        .unwrap_or_else(|e| e.degraded_text());

    Ok(Json(FeedbackResponse {
        feedback,
        expert_solution,
    }))
}

/// POST /api/ask
///
/// Free-form Islamic Finance Q&A. No store lookup.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let prompt = question_prompt(&request.question, request.language);

    let answer = state
        .llm
        .generate(&prompt, QUESTION_PARAMS)
        .await
        .unwrap_or_else(|e| e.degraded_text());

    Ok(Json(AskResponse { answer }))
}
