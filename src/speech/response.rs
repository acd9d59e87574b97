//! Response payloads and the per-state generator

use super::language;
use crate::news::{ContentProvider, CredentialSource, ProviderError, DEFAULT_SECTION};
use crate::state_machine::{DialogContext, DialogState, HEADLINES_PER_TURN};

/// A spoken response ready for the platform envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillResponse {
    /// Full SSML document, `<speak>` wrapper included
    pub ssml: String,
    /// Spoken if the user stays silent
    pub reprompt: Option<String>,
    pub should_end_session: bool,
}

impl SkillResponse {
    /// A response that keeps the session open and waits for the user
    pub fn ask(text: &str, reprompt: &str) -> Self {
        Self {
            ssml: speak(text),
            reprompt: Some(speak(reprompt)),
            should_end_session: false,
        }
    }

    /// A response that closes the session
    pub fn tell(text: &str) -> Self {
        Self {
            ssml: speak(text),
            reprompt: None,
            should_end_session: true,
        }
    }

    /// Fixed error payload
    pub fn error(text: &str, end_session: bool) -> Self {
        Self {
            ssml: speak(text),
            reprompt: None,
            should_end_session: end_session,
        }
    }

    /// Generic apology used for every provider failure
    pub fn apology() -> Self {
        Self::error(&language::api_error(), true)
    }
}

fn speak(text: &str) -> String {
    format!("<speak>{text}</speak>")
}

/// Generates the response for the state the context has just entered
pub struct ResponseGenerator<P> {
    provider: P,
}

impl<P: ContentProvider> ResponseGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Render the response for `context.current_state`.
    ///
    /// Only `InList` touches the provider (and the credential source); reading
    /// a batch advances the context's list pointers.
    pub async fn generate<C>(
        &self,
        context: &mut DialogContext,
        credentials: &C,
    ) -> Result<SkillResponse, ProviderError>
    where
        C: CredentialSource + ?Sized,
    {
        match context.current_state {
            DialogState::Init | DialogState::AwaitingSection | DialogState::Unknown => Ok(
                SkillResponse::ask(&language::welcome(), &language::section_reprompt()),
            ),
            DialogState::Help => Ok(SkillResponse::ask(
                &language::help(),
                &language::section_reprompt(),
            )),
            DialogState::Ended => Ok(SkillResponse::tell(&language::goodbye())),
            DialogState::InList => self.read_batch(context, credentials).await,
        }
    }

    async fn read_batch<C>(
        &self,
        context: &mut DialogContext,
        credentials: &C,
    ) -> Result<SkillResponse, ProviderError>
    where
        C: CredentialSource + ?Sized,
    {
        let section = context
            .requested_section
            .clone()
            .unwrap_or_else(|| DEFAULT_SECTION.to_string());
        let api_key = credentials.api_key()?;
        let page = self
            .provider
            .fetch(&section, context.next_item, HEADLINES_PER_TURN, &api_key)
            .await?;

        if page.items.is_empty() {
            context.list_length = page.total;
            return Ok(SkillResponse::ask(
                &language::no_more_headlines(&section),
                &language::section_reprompt(),
            ));
        }

        let first = context.next_item == 0;
        let read = u32::try_from(page.items.len()).unwrap_or(u32::MAX);
        context.advance(read, page.total);

        let mut text = language::headline_batch(&section, first, &page.items);
        if context.at_end_of_list() {
            text.push_str(&language::end_of_list(&section));
            Ok(SkillResponse::ask(&text, &language::section_reprompt()))
        } else {
            text.push_str(&language::more_prompt());
            Ok(SkillResponse::ask(&text, &language::more_prompt()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::{KeySource, ProviderErrorKind};
    use crate::skill::testing::MockContentProvider;

    fn key() -> KeySource {
        KeySource::Inline("test-key".to_string())
    }

    fn in_list(section: &str, next_item: u32) -> DialogContext {
        DialogContext {
            current_state: DialogState::InList,
            requested_section: Some(section.to_string()),
            next_item,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_first_batch_advances_pointers() {
        let provider = MockContentProvider::new().with_section("world", 7);
        let generator = ResponseGenerator::new(provider);
        let mut ctx = in_list("world", 0);

        let resp = generator.generate(&mut ctx, &key()).await.unwrap();

        assert!(resp.ssml.contains("top headlines in world"));
        assert!(resp.ssml.contains("world headline 2"));
        assert!(!resp.ssml.contains("world headline 3"));
        assert!(!resp.should_end_session);
        assert_eq!(ctx.last_starting_item, 0);
        assert_eq!(ctx.next_item, 3);
        assert_eq!(ctx.list_length, 7);
    }

    #[tokio::test]
    async fn test_last_batch_announces_end() {
        let provider = MockContentProvider::new().with_section("world", 7);
        let generator = ResponseGenerator::new(provider);
        let mut ctx = in_list("world", 6);

        let resp = generator.generate(&mut ctx, &key()).await.unwrap();

        assert!(resp.ssml.contains("world headline 6"));
        assert!(resp.ssml.contains("That's all the headlines in world"));
        assert_eq!(ctx.last_starting_item, 6);
        assert_eq!(ctx.next_item, 7);
    }

    #[tokio::test]
    async fn test_past_end_leaves_pointers() {
        let provider = MockContentProvider::new().with_section("world", 4);
        let generator = ResponseGenerator::new(provider);
        let mut ctx = in_list("world", 4);
        ctx.last_starting_item = 3;

        let resp = generator.generate(&mut ctx, &key()).await.unwrap();

        assert!(resp.ssml.contains("no more headlines"));
        assert_eq!(ctx.next_item, 4);
        assert_eq!(ctx.last_starting_item, 3);
    }

    #[tokio::test]
    async fn test_no_section_reads_top_stories() {
        let provider = MockContentProvider::new().with_section("home", 5);
        let generator = ResponseGenerator::new(provider);
        let mut ctx = DialogContext {
            current_state: DialogState::InList,
            ..Default::default()
        };

        let resp = generator.generate(&mut ctx, &key()).await.unwrap();

        assert!(resp.ssml.contains("top stories"));
        assert_eq!(generator.provider().recorded_fetches(), vec![("home".to_string(), 0)]);
    }

    #[tokio::test]
    async fn test_non_list_states_skip_provider() {
        let generator = ResponseGenerator::new(MockContentProvider::new());

        for state in [
            DialogState::Init,
            DialogState::AwaitingSection,
            DialogState::Help,
            DialogState::Ended,
            DialogState::Unknown,
        ] {
            let mut ctx = DialogContext {
                current_state: state,
                ..Default::default()
            };
            let resp = generator.generate(&mut ctx, &KeySource::Missing).await.unwrap();
            assert_eq!(resp.should_end_session, state == DialogState::Ended);
        }
        assert!(generator.provider().recorded_fetches().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_is_provider_error() {
        let provider = MockContentProvider::new().with_section("world", 5);
        let generator = ResponseGenerator::new(provider);
        let mut ctx = in_list("world", 0);

        let err = generator
            .generate(&mut ctx, &KeySource::Missing)
            .await
            .unwrap_err();

        assert_eq!(err.kind, ProviderErrorKind::Credentials);
        assert!(generator.provider().recorded_fetches().is_empty());
        assert_eq!(ctx.next_item, 0);
    }

    #[test]
    fn test_apology_ends_session() {
        let resp = SkillResponse::apology();
        assert!(resp.should_end_session);
        assert!(resp.ssml.starts_with("<speak>Sorry"));
    }
}
