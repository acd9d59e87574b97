//! Top Stories section vocabulary

/// Section read when the user asks for headlines without naming one
pub const DEFAULT_SECTION: &str = "home";

const SECTIONS: [&str; 26] = [
    "arts",
    "automobiles",
    "books",
    "business",
    "fashion",
    "food",
    "health",
    "home",
    "insider",
    "magazine",
    "movies",
    "nyregion",
    "obituaries",
    "opinion",
    "politics",
    "realestate",
    "science",
    "sports",
    "sundayreview",
    "technology",
    "theater",
    "t-magazine",
    "travel",
    "upshot",
    "us",
    "world",
];

/// Spoken forms the speech recognizer produces for sections whose API names
/// are not words
const ALIASES: [(&str, &str); 11] = [
    ("tech", "technology"),
    ("new york", "nyregion"),
    ("new york region", "nyregion"),
    ("real estate", "realestate"),
    ("sunday review", "sundayreview"),
    ("u.s.", "us"),
    ("national", "us"),
    ("top stories", "home"),
    ("theatre", "theater"),
    ("movie", "movies"),
    ("obituary", "obituaries"),
];

/// Resolve a lowercase spoken section name to its API section name
pub fn resolve_section(spoken: &str) -> Option<&'static str> {
    SECTIONS
        .iter()
        .find(|section| **section == spoken)
        .copied()
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == spoken)
                .map(|(_, section)| *section)
        })
}
