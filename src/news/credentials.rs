//! API key sources

use super::ProviderError;
use std::path::PathBuf;
use std::sync::Arc;

/// Supplies the provider API key for a turn
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Result<String, ProviderError>;
}

impl<T: CredentialSource + ?Sized> CredentialSource for Arc<T> {
    fn api_key(&self) -> Result<String, ProviderError> {
        (**self).api_key()
    }
}

/// Where the production key comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Key given directly in configuration
    Inline(String),
    /// Key read from a file on each request, so rotation needs no restart
    File(PathBuf),
    /// Nothing configured; every lookup fails
    Missing,
}

impl CredentialSource for KeySource {
    fn api_key(&self) -> Result<String, ProviderError> {
        match self {
            KeySource::Inline(key) => Ok(key.clone()),
            KeySource::File(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    ProviderError::credentials(format!(
                        "Failed to read API key from {}: {e}",
                        path.display()
                    ))
                })?;
                let key = contents.trim();
                if key.is_empty() {
                    return Err(ProviderError::credentials(format!(
                        "API key file {} is empty",
                        path.display()
                    )));
                }
                Ok(key.to_string())
            }
            KeySource::Missing => Err(ProviderError::credentials(
                "No API key configured. Set NYT_API_KEY or NYT_API_KEY_FILE.",
            )),
        }
    }
}
