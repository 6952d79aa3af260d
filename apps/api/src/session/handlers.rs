use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::{CareerRoadmap, SkillTranslation};
use crate::session::{ProfileRecord, SessionView, SCREEN_NAMES};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewProgress {
    pub answered: usize,
    pub total: usize,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub profile: Option<ProfileRecord>,
    pub last_translation: Option<SkillTranslation>,
    pub last_roadmap: Option<CareerRoadmap>,
    pub interview: Option<InterviewProgress>,
}

fn no_session() -> AppError {
    AppError::NotFound("No interview session in progress".to_string())
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileRecord>, AppError> {
    let record = state
        .profiles
        .current()
        .await
        .ok_or_else(|| AppError::NotFound("No profile has been translated yet".to_string()))?;
    Ok(Json(record.as_ref().clone()))
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let profile = state.profiles.current().await.map(|r| r.as_ref().clone());
    let interview = state
        .screens
        .interview_session
        .read()
        .await
        .as_ref()
        .map(|session| InterviewProgress {
            answered: session.cursor(),
            total: session.total(),
            completed: session.is_completed(),
        });

    Json(DashboardResponse {
        profile,
        last_translation: state.screens.translator.last_result(),
        last_roadmap: state.screens.roadmap.last_result(),
        interview,
    })
}

/// GET /api/v1/screens/:screen
pub async fn handle_screen_state(
    State(state): State<AppState>,
    Path(screen): Path<String>,
) -> Result<Json<Value>, AppError> {
    let screens = &state.screens;
    let snapshot = match screen.as_str() {
        "translator" => serde_json::to_value(screens.translator.snapshot()),
        "resume" => serde_json::to_value(screens.resume.snapshot()),
        "roadmap" => serde_json::to_value(screens.roadmap.snapshot()),
        "interview" => serde_json::to_value(screens.interview.snapshot()),
        _ => {
            return Err(AppError::NotFound(format!(
                "Unknown screen '{screen}', expected one of {}",
                SCREEN_NAMES.join(", ")
            )))
        }
    }
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(snapshot))
}

/// GET /api/v1/interview
pub async fn handle_get_interview(
    State(state): State<AppState>,
) -> Result<Json<SessionView>, AppError> {
    let guard = state.screens.interview_session.read().await;
    let session = guard.as_ref().ok_or_else(no_session)?;
    Ok(Json(session.view()))
}

/// POST /api/v1/interview/answer
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    let mut guard = state.screens.interview_session.write().await;
    let session = guard.as_mut().ok_or_else(no_session)?;

    session.submit_answer(&req.answer)?;
    info!(
        "Interview session {} answered {}/{}",
        session.id(),
        session.cursor(),
        session.total()
    );
    Ok(Json(session.view()))
}

/// DELETE /api/v1/interview
pub async fn handle_reset_interview(State(state): State<AppState>) -> StatusCode {
    if let Some(session) = state.screens.interview_session.write().await.take() {
        info!("Interview session {} discarded", session.id());
    }
    StatusCode::NO_CONTENT
}
