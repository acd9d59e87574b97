//! Service configuration from the environment

use crate::news::KeySource;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HEADLINES_PORT is not a valid port: {0}")]
    InvalidPort(String),
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct SkillConfig {
    pub port: u16,
    /// Expected application id in request envelopes
    pub application_id: Option<String>,
    /// Override for the Top Stories API host
    pub nyt_base_url: Option<String>,
    pub key_source: KeySource,
}

impl SkillConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("HEADLINES_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        // An inline key wins over a key file
        let key_source = match (var("NYT_API_KEY"), var("NYT_API_KEY_FILE")) {
            (Some(key), _) => KeySource::Inline(key.trim().to_string()),
            (None, Some(path)) => KeySource::File(PathBuf::from(path)),
            (None, None) => KeySource::Missing,
        };

        Ok(Self {
            port,
            application_id: var("HEADLINES_SKILL_ID"),
            nyt_base_url: var("NYT_BASE_URL"),
            key_source,
        })
    }
}
