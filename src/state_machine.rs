//! Dialog session state machine
//!
//! Pure state transitions over a finite set of dialog states, driven by
//! symbols resolved from the voice platform's intent names.

pub mod context;
mod state;
mod symbol;
mod transition;

#[cfg(test)]
mod proptests;

pub use context::{DialogContext, HEADLINES_PER_TURN};
pub use state::DialogState;
pub use symbol::{Symbol, CANCEL_INTENT, START_LIST_INTENT};
pub use transition::transition;
