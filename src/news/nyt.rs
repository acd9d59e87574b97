//! New York Times Top Stories provider implementation

use super::{resolve_section, ContentProvider, Headline, HeadlinePage, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.nytimes.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Top Stories client
pub struct NytClient {
    client: Client,
    base_url: String,
}

impl NytClient {
    pub fn new(base_url: Option<&str>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }

    fn section_url(&self, section: &str) -> String {
        format!("{}/svc/topstories/v2/{section}.json", self.base_url)
    }

    fn classify_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
        match status.as_u16() {
            401 | 403 => ProviderError::auth(format!("API key rejected ({status}): {body}")),
            _ => ProviderError::http(format!("Top Stories returned {status}: {body}")),
        }
    }
}

#[async_trait]
impl ContentProvider for NytClient {
    async fn fetch(
        &self,
        section: &str,
        start: u32,
        count: u32,
        api_key: &str,
    ) -> Result<HeadlinePage, ProviderError> {
        let response = self
            .client
            .get(self.section_url(section))
            .query(&[("api-key", api_key)])
            .send()
            .await
            .map_err(|e| ProviderError::network(format!("Request failed: {}", e.without_url())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| {
                ProviderError::network(format!(
                    "Failed to read response body: {}",
                    e.without_url()
                ))
            })?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &body));
        }

        let headlines = parse_top_stories(&body)?;
        Ok(page_of(headlines, start, count))
    }

    fn resolve_section(&self, spoken: &str) -> Option<String> {
        resolve_section(spoken).map(str::to_string)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct TopStoriesResponse {
    status: String,
    #[serde(default)]
    results: Vec<TopStory>,
}

#[derive(Debug, Deserialize)]
struct TopStory {
    #[serde(default)]
    title: String,
}

fn parse_top_stories(body: &str) -> Result<Vec<Headline>, ProviderError> {
    let parsed: TopStoriesResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::malformed(format!("Unparseable Top Stories body: {e}")))?;

    if parsed.status != "OK" {
        return Err(ProviderError::malformed(format!(
            "Top Stories reported status {}",
            parsed.status
        )));
    }

    Ok(parsed
        .results
        .into_iter()
        .filter(|story| !story.title.trim().is_empty())
        .map(|story| Headline {
            title: story.title.trim().to_string(),
        })
        .collect())
}

fn page_of(headlines: Vec<Headline>, start: u32, count: u32) -> HeadlinePage {
    let total = u32::try_from(headlines.len()).unwrap_or(u32::MAX);
    let items = headlines
        .into_iter()
        .skip(start as usize)
        .take(count as usize)
        .collect();
    HeadlinePage { items, total }
}
