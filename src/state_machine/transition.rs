//! Pure state transition function
//!
//! Given the same inputs this always produces the same output, with no I/O.
//! The match below is exhaustive over `DialogState x Symbol`, so every pair
//! has a defined successor.

use super::{DialogState, Symbol};

/// Compute the next dialog state
pub fn transition(state: DialogState, symbol: Symbol) -> DialogState {
    match (state, symbol) {
        // ============================================================
        // Global commands: legal from every state
        // ============================================================
        (_, Symbol::Cancel | Symbol::Stop) => DialogState::Ended,

        (_, Symbol::StartList) => DialogState::InList,

        (_, Symbol::Launch) => DialogState::AwaitingSection,

        (_, Symbol::Help) => DialogState::Help,

        // ============================================================
        // Paging through a list
        // ============================================================
        (
            DialogState::InList | DialogState::Help,
            Symbol::Next | Symbol::Previous | Symbol::Repeat | Symbol::StartOver | Symbol::Yes,
        ) => DialogState::InList,

        (DialogState::InList | DialogState::Help | DialogState::AwaitingSection, Symbol::No) => {
            DialogState::Ended
        }

        // ============================================================
        // No section chosen yet: keep asking
        // ============================================================
        (
            DialogState::AwaitingSection,
            Symbol::Next | Symbol::Previous | Symbol::Repeat | Symbol::StartOver | Symbol::Yes,
        ) => DialogState::AwaitingSection,

        // Fresh, stale or corrupted sessions re-initialize on any paging input
        (
            DialogState::Init | DialogState::Unknown | DialogState::Ended,
            Symbol::Next
            | Symbol::Previous
            | Symbol::Repeat
            | Symbol::StartOver
            | Symbol::Yes
            | Symbol::No,
        ) => DialogState::AwaitingSection,
    }
}
