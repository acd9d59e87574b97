//! News content provider abstraction
//!
//! Provides a common interface for fetching section headlines, plus the
//! New York Times Top Stories implementation.

mod credentials;
mod error;
mod nyt;
mod sections;
mod types;

pub use credentials::{CredentialSource, KeySource};
pub use error::{ProviderError, ProviderErrorKind};
pub use nyt::NytClient;
pub use sections::{resolve_section, DEFAULT_SECTION};
pub use types::{Headline, HeadlinePage};

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for headline providers
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch up to `count` headlines of `section`, starting at index `start`
    async fn fetch(
        &self,
        section: &str,
        start: u32,
        count: u32,
        api_key: &str,
    ) -> Result<HeadlinePage, ProviderError>;

    /// Map a normalized spoken section name onto the provider's vocabulary
    fn resolve_section(&self, spoken: &str) -> Option<String>;
}

#[async_trait]
impl<T: ContentProvider + ?Sized> ContentProvider for Arc<T> {
    async fn fetch(
        &self,
        section: &str,
        start: u32,
        count: u32,
        api_key: &str,
    ) -> Result<HeadlinePage, ProviderError> {
        (**self).fetch(section, start, count, api_key).await
    }

    fn resolve_section(&self, spoken: &str) -> Option<String> {
        (**self).resolve_section(spoken)
    }
}

/// Logging wrapper for content providers
pub struct LoggingProvider<P> {
    inner: P,
}

impl<P: ContentProvider> LoggingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: ContentProvider> ContentProvider for LoggingProvider<P> {
    async fn fetch(
        &self,
        section: &str,
        start: u32,
        count: u32,
        api_key: &str,
    ) -> Result<HeadlinePage, ProviderError> {
        let started = std::time::Instant::now();
        let result = self.inner.fetch(section, start, count, api_key).await;
        let duration = started.elapsed();

        match &result {
            Ok(page) => {
                tracing::info!(
                    section,
                    start,
                    returned = page.items.len(),
                    total = page.total,
                    duration_ms = %duration.as_millis(),
                    "Headline fetch completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    section,
                    start,
                    duration_ms = %duration.as_millis(),
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Headline fetch failed"
                );
            }
        }

        result
    }

    fn resolve_section(&self, spoken: &str) -> Option<String> {
        self.inner.resolve_section(spoken)
    }
}
