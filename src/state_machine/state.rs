//! Dialog state types

use std::fmt;

/// Where the conversation is between turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogState {
    /// Fresh session, nothing said yet
    #[default]
    Init,

    /// Launched; waiting for the user to name a section
    AwaitingSection,

    /// Reading headlines from the requested section
    InList,

    /// Help text was just read
    Help,

    /// Conversation is over for this session
    Ended,

    /// Stored name did not match any known state
    Unknown,
}

/// Persisted state names. Lookup is by exact match; anything else is `Unknown`.
const STATE_NAMES: [(&str, DialogState); 6] = [
    ("INIT", DialogState::Init),
    ("AWAITING_SECTION", DialogState::AwaitingSection),
    ("IN_LIST", DialogState::InList),
    ("HELP", DialogState::Help),
    ("ENDED", DialogState::Ended),
    ("UNKNOWN", DialogState::Unknown),
];

impl DialogState {
    /// Every declared state, in table order
    #[cfg(test)]
    pub const ALL: [DialogState; 6] = [
        DialogState::Init,
        DialogState::AwaitingSection,
        DialogState::InList,
        DialogState::Help,
        DialogState::Ended,
        DialogState::Unknown,
    ];

    /// Parse a stored state name. Never fails: unrecognized names map to `Unknown`.
    pub fn from_name(name: &str) -> Self {
        STATE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map_or(DialogState::Unknown, |(_, state)| *state)
    }

    /// Name used when persisting to the session store
    pub fn name(self) -> &'static str {
        match self {
            DialogState::Init => "INIT",
            DialogState::AwaitingSection => "AWAITING_SECTION",
            DialogState::InList => "IN_LIST",
            DialogState::Help => "HELP",
            DialogState::Ended => "ENDED",
            DialogState::Unknown => "UNKNOWN",
        }
    }

    /// Check if the session should close after this turn
    pub fn is_terminal(self) -> bool {
        matches!(self, DialogState::Ended)
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
