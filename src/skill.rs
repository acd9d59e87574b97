//! Turn handling for the headlines skill
//!
//! One request in, one spoken response out. Session state travels in the
//! platform's attribute map and is rebuilt into a `DialogContext` each turn.

mod session;
mod turn;

#[cfg(test)]
pub mod testing;

pub use session::{IntentInput, SessionAttributes, SessionStore};
pub use turn::TurnOrchestrator;
