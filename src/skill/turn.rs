//! Per-request turn orchestration

use super::{IntentInput, SessionStore};
use crate::news::{ContentProvider, CredentialSource, ProviderErrorKind};
use crate::speech::{unknown_section_error, ResponseGenerator, SkillResponse};
use crate::state_machine::{
    transition, DialogContext, Symbol, CANCEL_INTENT, START_LIST_INTENT,
};
use thiserror::Error;

/// Slot on `StartList` that names the section
pub const SECTION_SLOT: &str = "Section";

/// The recognizer hears "cancel" as a section name; treat it as a cancel
const CANCEL_SECTION: &str = "cancel";

/// Errors that abort a turn outright
#[derive(Debug, Error)]
pub enum TurnError {
    /// The platform sent an intent the skill does not declare
    #[error("Unrecognized intent: {0}")]
    UnrecognizedIntent(String),
}

/// What a `StartList` turn asked for
#[derive(Debug, PartialEq, Eq)]
enum SectionRequest {
    /// No section slot; keep whatever is selected
    Absent,
    Cancel,
    Known(String),
    Unknown(String),
}

/// Runs one conversation turn end to end
pub struct TurnOrchestrator<P, C> {
    generator: ResponseGenerator<P>,
    credentials: C,
}

impl<P, C> TurnOrchestrator<P, C>
where
    P: ContentProvider,
    C: CredentialSource,
{
    pub fn new(provider: P, credentials: C) -> Self {
        Self {
            generator: ResponseGenerator::new(provider),
            credentials,
        }
    }

    #[cfg(test)]
    pub fn provider(&self) -> &P {
        self.generator.provider()
    }

    /// Start a session: fresh context, `Launch` symbol
    pub async fn launch<S>(&self, session: &mut S) -> SkillResponse
    where
        S: SessionStore + ?Sized,
    {
        let mut context = DialogContext::default();
        context.current_state = transition(context.current_state, Symbol::Launch);
        tracing::info!(context = %context, "Launching session");

        let response = self.respond(&mut context).await;
        context.store(session);
        response
    }

    /// Handle one intent against the stored session context.
    ///
    /// Only an undeclared intent is an error. Unknown sections and provider
    /// failures become degraded spoken responses.
    pub async fn handle_intent<S>(
        &self,
        intent: &IntentInput,
        session: &mut S,
    ) -> Result<SkillResponse, TurnError>
    where
        S: SessionStore + ?Sized,
    {
        let mut context = DialogContext::load(session);
        tracing::info!(intent = %intent.name, context = %context, "Retrieved dialog context");

        let mut intent_name = intent.name.as_str();

        if intent_name == START_LIST_INTENT {
            match self.classify_section(intent) {
                SectionRequest::Absent => {}
                SectionRequest::Cancel => {
                    intent_name = CANCEL_INTENT;
                    select_section(&mut context, None);
                }
                SectionRequest::Known(section) => select_section(&mut context, Some(section)),
                SectionRequest::Unknown(requested) => {
                    tracing::warn!(section = %requested, "Requested section is unknown");
                    return Ok(SkillResponse::error(&unknown_section_error(), false));
                }
            }
        }

        let symbol = Symbol::from_intent(intent_name)
            .ok_or_else(|| TurnError::UnrecognizedIntent(intent_name.to_string()))?;

        match symbol {
            Symbol::Repeat => context.rewind_to_last_batch(),
            Symbol::StartOver => context.restart_list(),
            Symbol::Previous => context.step_back(),
            _ => {}
        }

        let previous = context.current_state;
        context.current_state = transition(previous, symbol);
        tracing::info!(
            from = %previous,
            to = %context.current_state,
            symbol = ?symbol,
            ends_session = context.current_state.is_terminal(),
            context = %context,
            "Dialog transition"
        );

        let response = self.respond(&mut context).await;

        tracing::info!(context = %context, "Storing dialog context");
        context.store(session);
        Ok(response)
    }

    fn classify_section(&self, intent: &IntentInput) -> SectionRequest {
        let Some(raw) = intent.slot(SECTION_SLOT) else {
            return SectionRequest::Absent;
        };
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return SectionRequest::Absent;
        }

        match self.generator.provider().resolve_section(&normalized) {
            Some(section) => SectionRequest::Known(section),
            None if normalized == CANCEL_SECTION => SectionRequest::Cancel,
            None => SectionRequest::Unknown(normalized),
        }
    }

    async fn respond(&self, context: &mut DialogContext) -> SkillResponse {
        match self.generator.generate(context, &self.credentials).await {
            Ok(response) => response,
            Err(e) => {
                match e.kind {
                    ProviderErrorKind::Credentials | ProviderErrorKind::Auth => {
                        tracing::error!(kind = e.kind.as_str(), error = %e, "Headline provider credentials failed");
                    }
                    ProviderErrorKind::Network
                    | ProviderErrorKind::Http
                    | ProviderErrorKind::Malformed => {
                        tracing::error!(kind = e.kind.as_str(), error = %e, "Headline provider unavailable");
                    }
                }
                SkillResponse::apology()
            }
        }
    }
}

/// Switch sections; a different section restarts pagination and forgets the
/// old list's length
fn select_section(context: &mut DialogContext, section: Option<String>) {
    if context.requested_section != section {
        context.restart_list();
        context.list_length = 0;
    }
    context.requested_section = section;
}
