//! Mock implementations for testing
//!
//! These mocks enable turn-level testing without network I/O.

use crate::news::{
    resolve_section, ContentProvider, Headline, HeadlinePage, ProviderError, ProviderErrorKind,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock provider serving synthetic headlines ("world headline 0", ...)
#[derive(Default)]
pub struct MockContentProvider {
    sections: HashMap<String, u32>,
    failure: Option<ProviderErrorKind>,
    /// Record of (section, start) for every fetch
    fetches: Mutex<Vec<(String, u32)>>,
}

impl MockContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `count` headlines for `section`
    pub fn with_section(mut self, section: &str, count: u32) -> Self {
        self.sections.insert(section.to_string(), count);
        self
    }

    /// Fail every fetch with the given kind
    pub fn failing(mut self, kind: ProviderErrorKind) -> Self {
        self.failure = Some(kind);
        self
    }

    /// Get recorded fetches
    pub fn recorded_fetches(&self) -> Vec<(String, u32)> {
        self.fetches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    async fn fetch(
        &self,
        section: &str,
        start: u32,
        count: u32,
        _api_key: &str,
    ) -> Result<HeadlinePage, ProviderError> {
        self.fetches
            .lock()
            .unwrap()
            .push((section.to_string(), start));

        if let Some(kind) = self.failure {
            return Err(ProviderError::new(kind, "mock provider failure"));
        }

        let total = self.sections.get(section).copied().unwrap_or(0);
        let end = start.saturating_add(count).min(total);
        let items = (start..end)
            .map(|i| Headline::new(format!("{section} headline {i}")))
            .collect();
        Ok(HeadlinePage { items, total })
    }

    fn resolve_section(&self, spoken: &str) -> Option<String> {
        resolve_section(spoken).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_windows() {
        let mock = MockContentProvider::new().with_section("world", 4);

        let page = mock.fetch("world", 2, 3, "key").await.unwrap();
        assert_eq!(page.total, 4);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].title, "world headline 2");

        let page = mock.fetch("arts", 0, 3, "key").await.unwrap();
        assert!(page.items.is_empty());

        assert_eq!(
            mock.recorded_fetches(),
            vec![("world".to_string(), 2), ("arts".to_string(), 0)]
        );
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let mock = MockContentProvider::new().failing(ProviderErrorKind::Network);
        let err = mock.fetch("world", 0, 3, "key").await.unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::Network);
    }
}
