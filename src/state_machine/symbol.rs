//! Input symbols and the intent-name mapping

/// Recognized user input, the alphabet of the dialog state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Launch,
    StartList,
    Next,
    Previous,
    Repeat,
    StartOver,
    Cancel,
    Stop,
    Help,
    Yes,
    No,
}

/// Intent name the platform sends when the user cancels
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";

/// Intent name for reading a section's headlines
pub const START_LIST_INTENT: &str = "StartList";

/// Pseudo-intent used for session launch requests
pub const LAUNCH_INTENT: &str = "Launch";

/// Intent identifiers as declared in the skill's interaction model
const INTENT_SYMBOLS: [(&str, Symbol); 11] = [
    (LAUNCH_INTENT, Symbol::Launch),
    (START_LIST_INTENT, Symbol::StartList),
    ("AMAZON.NextIntent", Symbol::Next),
    ("AMAZON.PreviousIntent", Symbol::Previous),
    ("AMAZON.RepeatIntent", Symbol::Repeat),
    ("AMAZON.StartOverIntent", Symbol::StartOver),
    (CANCEL_INTENT, Symbol::Cancel),
    ("AMAZON.StopIntent", Symbol::Stop),
    ("AMAZON.HelpIntent", Symbol::Help),
    ("AMAZON.YesIntent", Symbol::Yes),
    ("AMAZON.NoIntent", Symbol::No),
];

impl Symbol {
    #[cfg(test)]
    pub const ALL: [Symbol; 11] = [
        Symbol::Launch,
        Symbol::StartList,
        Symbol::Next,
        Symbol::Previous,
        Symbol::Repeat,
        Symbol::StartOver,
        Symbol::Cancel,
        Symbol::Stop,
        Symbol::Help,
        Symbol::Yes,
        Symbol::No,
    ];

    /// Look up the symbol for an intent name (exact, case-sensitive)
    pub fn from_intent(intent_name: &str) -> Option<Self> {
        INTENT_SYMBOLS
            .iter()
            .find(|(name, _)| *name == intent_name)
            .map(|(_, symbol)| *symbol)
    }
}
