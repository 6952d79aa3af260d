use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{CareerRoadmap, MilitaryProfile, SkillTranslation};
use crate::session::{InterviewSession, SessionView};
use crate::state::AppState;

fn default_technology() -> String {
    "Technology".to_string()
}

fn default_roadmap_industry() -> String {
    "Cybersecurity".to_string()
}

fn default_roadmap_salary() -> String {
    "$130,000".to_string()
}

fn default_role() -> String {
    "Product Manager".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResumeRequest {
    pub content: String,
    #[serde(default = "default_technology")]
    pub target_industry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizeResumeResponse {
    pub optimized: String,
    /// True when the service returned no text; the screen shows a placeholder.
    pub empty: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    #[serde(default = "default_roadmap_industry")]
    pub target_industry: String,
    /// Display label only, never parsed.
    #[serde(default = "default_roadmap_salary")]
    pub target_salary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewStartRequest {
    #[serde(default = "default_technology")]
    pub industry: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn validate_profile(profile: &MilitaryProfile) -> Result<(), AppError> {
    if profile.mos_code.trim().is_empty() {
        return Err(AppError::Validation("mosCode cannot be empty".to_string()));
    }
    if profile.mos_title.trim().is_empty() {
        return Err(AppError::Validation("mosTitle cannot be empty".to_string()));
    }
    Ok(())
}

/// POST /api/v1/skills/translate
pub async fn handle_translate_skills(
    State(state): State<AppState>,
    Json(profile): Json<MilitaryProfile>,
) -> Result<Json<SkillTranslation>, AppError> {
    validate_profile(&profile)?;

    let in_flight = state.screens.translator.begin(profile.clone())?;
    match state.gateway.translate_skills(&profile).await {
        Ok(translation) => {
            // The profile is stored before the screen reports success; a request
            // dropped in between leaves the screen cancelled, not succeeded.
            state.profiles.replace(profile).await;
            in_flight.succeed(translation.clone());
            Ok(Json(translation))
        }
        Err(e) => {
            in_flight.fail(&e);
            Err(e.into())
        }
    }
}

/// POST /api/v1/resume/optimize
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    Json(req): Json<OptimizeResumeRequest>,
) -> Result<Json<OptimizeResumeResponse>, AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let in_flight = state.screens.resume.begin(req.clone())?;
    let optimized = in_flight.settle(
        state
            .gateway
            .optimize_resume(&req.content, &req.target_industry)
            .await,
    )?;

    Ok(Json(OptimizeResumeResponse {
        empty: optimized.trim().is_empty(),
        optimized,
    }))
}

/// POST /api/v1/roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(req): Json<RoadmapRequest>,
) -> Result<Json<CareerRoadmap>, AppError> {
    let record = state
        .profiles
        .current()
        .await
        .ok_or(AppError::ProfileRequired)?;

    let in_flight = state.screens.roadmap.begin(req.clone())?;
    let roadmap = in_flight.settle(
        state
            .gateway
            .generate_roadmap(&record.profile, &req.target_industry, &req.target_salary)
            .await,
    )?;

    Ok(Json(roadmap))
}

/// POST /api/v1/interview/start
///
/// Replaces any running session with a fresh one.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(req): Json<InterviewStartRequest>,
) -> Result<Json<SessionView>, AppError> {
    let in_flight = state.screens.interview.begin(req.clone())?;
    let questions = in_flight.settle(
        state
            .gateway
            .get_interview_questions(&req.industry, &req.role)
            .await,
    )?;

    let session = InterviewSession::new(req.industry, req.role, questions).map_err(|e| {
        warn!("Could not open interview session: {e}");
        AppError::MalformedResponse(e.to_string())
    })?;
    let view = session.view();

    *state.screens.interview_session.write().await = Some(session);
    info!("Interview session {} started", view.id);
    Ok(Json(view))
}
