//! HTTP request handlers

use super::types::{ErrorResponse, PlatformRequest, SkillRequestEnvelope, SkillResponseEnvelope};
use super::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Voice platform webhook
        .route("/skill", post(handle_skill_request))
        .route("/health", get(health))
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Skill Webhook
// ============================================================

async fn handle_skill_request(
    State(state): State<AppState>,
    Json(mut envelope): Json<SkillRequestEnvelope>,
) -> Result<Json<SkillResponseEnvelope>, AppError> {
    state.verify_application(envelope.application_id())?;

    let session_id = envelope.session_id().to_string();
    let new_session = envelope.is_new_session();
    let mut attributes = envelope.take_attributes();

    match envelope.request {
        PlatformRequest::LaunchRequest(meta) => {
            tracing::info!(request_id = %meta.request_id, session_id = %session_id, new_session, "Launch request");
            let response = state.orchestrator.launch(&mut attributes).await;
            Ok(Json(SkillResponseEnvelope::new(attributes, response)))
        }
        PlatformRequest::IntentRequest(request) => {
            tracing::info!(
                request_id = %request.request_id,
                session_id = %session_id,
                new_session,
                intent = %request.intent.name,
                "Intent request"
            );
            let intent = request.intent.into_input();
            let response = state
                .orchestrator
                .handle_intent(&intent, &mut attributes)
                .await
                .map_err(|e| {
                    tracing::error!(session_id = %session_id, error = %e, "Turn aborted");
                    AppError::Internal(e.to_string())
                })?;
            Ok(Json(SkillResponseEnvelope::new(attributes, response)))
        }
        PlatformRequest::SessionEndedRequest(request) => {
            tracing::info!(
                request_id = %request.request_id,
                session_id = %session_id,
                reason = request.reason.as_deref().unwrap_or("unspecified"),
                "Session ended"
            );
            Ok(Json(SkillResponseEnvelope::empty()))
        }
        PlatformRequest::Unsupported => Err(AppError::BadRequest(
            "Unsupported request type".to_string(),
        )),
    }
}

// ============================================================
// Service Info
// ============================================================

async fn health() -> &'static str {
    "ok"
}

async fn get_version() -> &'static str {
    concat!("headline-reader ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
