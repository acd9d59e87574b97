//! Phrases spoken by the skill

use crate::news::Headline;

pub fn welcome() -> String {
    "Welcome to Headlines. Which section would you like to hear? \
     For example, you can say world, technology, or sports."
        .to_string()
}

pub fn section_reprompt() -> String {
    "Which section would you like to hear?".to_string()
}

pub fn help() -> String {
    "You can ask for the headlines in a section, like world or business. \
     While I'm reading, say next to hear more, previous to go back, \
     repeat to hear them again, or start over to go back to the top. \
     Say stop when you're done. Would you like to continue?"
        .to_string()
}

pub fn goodbye() -> String {
    "Goodbye.".to_string()
}

pub fn unknown_section_error() -> String {
    "Sorry, I don't know that section. Try world, business, or technology.".to_string()
}

pub fn api_error() -> String {
    "Sorry, I'm having trouble getting the headlines right now. Please try again later."
        .to_string()
}

pub fn more_prompt() -> String {
    "Would you like to hear more?".to_string()
}

pub fn end_of_list(section: &str) -> String {
    format!(
        "That's all the headlines in {}. Say start over to hear them again, or name another section.",
        spoken_section(section)
    )
}

pub fn no_more_headlines(section: &str) -> String {
    format!(
        "There are no more headlines in {}. Say start over to hear them again, or name another section.",
        spoken_section(section)
    )
}

/// Intro plus the titles of one batch, each followed by a short pause
pub fn headline_batch(section: &str, first: bool, headlines: &[Headline]) -> String {
    let mut text = if first {
        format!("Here are the top headlines in {}. ", spoken_section(section))
    } else {
        String::new()
    };
    for headline in headlines {
        text.push_str(&escape(&headline.title));
        text.push_str(". <break time=\"700ms\"/> ");
    }
    text
}

/// How a section name is read aloud
pub fn spoken_section(section: &str) -> &str {
    match section {
        "home" => "top stories",
        "nyregion" => "the New York region",
        "realestate" => "real estate",
        "sundayreview" => "the Sunday review",
        "t-magazine" => "T magazine",
        "us" => "U.S. news",
        other => other,
    }
}

/// Escape text for inclusion in SSML
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}
