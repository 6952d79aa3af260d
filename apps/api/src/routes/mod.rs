pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gateway::handlers as gateway_handlers;
use crate::session::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generative screens
        .route(
            "/api/v1/skills/translate",
            post(gateway_handlers::handle_translate_skills),
        )
        .route(
            "/api/v1/resume/optimize",
            post(gateway_handlers::handle_optimize_resume),
        )
        .route(
            "/api/v1/roadmap",
            post(gateway_handlers::handle_generate_roadmap),
        )
        .route(
            "/api/v1/interview/start",
            post(gateway_handlers::handle_start_interview),
        )
        // Interview simulator session
        .route(
            "/api/v1/interview",
            get(session_handlers::handle_get_interview)
                .delete(session_handlers::handle_reset_interview),
        )
        .route(
            "/api/v1/interview/answer",
            post(session_handlers::handle_submit_answer),
        )
        // Shared state
        .route("/api/v1/profile", get(session_handlers::handle_get_profile))
        .route("/api/v1/dashboard", get(session_handlers::handle_dashboard))
        .route(
            "/api/v1/screens/:screen",
            get(session_handlers::handle_screen_state),
        )
        .with_state(state)
}
