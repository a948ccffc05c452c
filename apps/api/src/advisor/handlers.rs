//! Axum route handlers for the career advisor and chatbot.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::advisor::prompts::{build_career_prompt, build_chat_prompt};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::profile::{EducationLevel, Profile, Question};
use crate::state::AppState;

/// Shown when the chat trigger is pressed with nothing to ask.
pub const EMPTY_QUESTION_WARNING: &str = "Please enter a question.";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: String,
    pub interaction_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub interaction_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ProfileOptionsResponse {
    pub education_levels: Vec<EducationLevel>,
    pub defaults: Profile,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/careers/recommend
///
/// Builds the career prompt from the submitted profile and returns whatever
/// the advisor produced: model text, a warning string, or the fallback message.
pub async fn handle_recommend(
    State(state): State<AppState>,
    AppJson(profile): AppJson<Profile>,
) -> Json<RecommendationResponse> {
    let interaction_id = Uuid::new_v4();
    let prompt = build_career_prompt(&profile);
    info!(
        %interaction_id,
        education = %profile.education,
        prompt_len = prompt.len(),
        "Generating career recommendations"
    );

    let recommendations = state.advisor.generate(&prompt).await;

    Json(RecommendationResponse {
        recommendations,
        interaction_id,
        generated_at: Utc::now(),
    })
}

/// POST /api/v1/chat
///
/// Blank or missing questions are rejected before the advisor is consulted.
pub async fn handle_chat(
    State(state): State<AppState>,
    AppJson(question): AppJson<Question>,
) -> Result<Json<ChatResponse>, AppError> {
    if question.is_blank() {
        return Err(AppError::Validation(EMPTY_QUESTION_WARNING.to_string()));
    }

    let interaction_id = Uuid::new_v4();
    let prompt = build_chat_prompt(&question);
    info!(%interaction_id, prompt_len = prompt.len(), "Answering career question");

    let answer = state.advisor.generate(&prompt).await;

    Ok(Json(ChatResponse {
        answer,
        interaction_id,
        generated_at: Utc::now(),
    }))
}

/// GET /api/v1/profile/options
///
/// Education choices and the form's initial values.
pub async fn handle_profile_options() -> Json<ProfileOptionsResponse> {
    Json(ProfileOptionsResponse {
        education_levels: EducationLevel::ALL.to_vec(),
        defaults: Profile::default(),
    })
}
