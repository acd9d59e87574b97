//! Headline data returned by content providers

/// A single news item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub title: String,
}

impl Headline {
    #[cfg(test)]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// A window into a section's ordered headline list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadlinePage {
    pub items: Vec<Headline>,
    /// Length of the full list the page was cut from
    pub total: u32,
}
