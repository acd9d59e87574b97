//! HTTP API for the headlines skill

mod handlers;
mod types;

pub use handlers::create_router;

use crate::news::{ContentProvider, CredentialSource};
use crate::skill::TurnOrchestrator;
use handlers::AppError;
use std::sync::Arc;

/// Orchestrator over type-erased collaborators, shared by all requests
pub type SkillOrchestrator = TurnOrchestrator<Arc<dyn ContentProvider>, Arc<dyn CredentialSource>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<SkillOrchestrator>,
    /// When set, requests for any other application id are rejected
    pub application_id: Option<Arc<str>>,
}

impl AppState {
    pub fn new(orchestrator: SkillOrchestrator, application_id: Option<String>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            application_id: application_id.map(Arc::from),
        }
    }

    fn verify_application(&self, received: Option<&str>) -> Result<(), AppError> {
        match (&self.application_id, received) {
            (None, _) => Ok(()),
            (Some(expected), Some(received)) if **expected == *received => Ok(()),
            (Some(_), received) => {
                tracing::warn!(application_id = ?received, "Rejecting request for foreign application");
                Err(AppError::BadRequest("Application id mismatch".to_string()))
            }
        }
    }
}
