//! Per-turn dialog context and its session-attribute encoding

use super::DialogState;
use crate::skill::SessionStore;
use serde_json::Value;
use std::fmt;

/// Session attribute keys
pub const LAST_STARTING_ITEM: &str = "lastStartingItem";
pub const NEXT_ITEM: &str = "nextItem";
pub const LIST_LENGTH: &str = "listLength";
pub const REQUESTED_SECTION: &str = "requestedSection";
pub const CURRENT_STATE: &str = "currentState";

/// Number of headlines read per turn
pub const HEADLINES_PER_TURN: u32 = 3;

/// Complete session state for one turn
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogContext {
    pub current_state: DialogState,
    /// Canonical section name; `None` means no section selected
    pub requested_section: Option<String>,
    /// Index of the next headline to read
    pub next_item: u32,
    /// Start of the most recently read batch
    pub last_starting_item: u32,
    /// Item count of the current list, 0 when unknown
    pub list_length: u32,
}

impl DialogContext {
    /// Rebuild the context from stored attributes.
    ///
    /// Missing or mistyped pointer attributes load as 0. A missing state loads
    /// as `Init`; a state name that fails to parse loads as `Unknown`.
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Self {
        let current_state = match store.get(CURRENT_STATE) {
            None | Some(Value::Null) => DialogState::Init,
            Some(Value::String(name)) => {
                let state = DialogState::from_name(name);
                if state == DialogState::Unknown && name != DialogState::Unknown.name() {
                    tracing::warn!(stored = %name, "Unrecognized stored dialog state");
                }
                state
            }
            Some(other) => {
                tracing::warn!(stored = %other, "Stored dialog state is not a string");
                DialogState::Unknown
            }
        };

        Self {
            current_state,
            requested_section: store
                .get(REQUESTED_SECTION)
                .and_then(Value::as_str)
                .map(str::to_string),
            next_item: read_pointer(store, NEXT_ITEM),
            last_starting_item: read_pointer(store, LAST_STARTING_ITEM),
            list_length: read_pointer(store, LIST_LENGTH),
        }
    }

    /// Write every field back into the session store
    pub fn store<S: SessionStore + ?Sized>(&self, store: &mut S) {
        store.set(LAST_STARTING_ITEM, Value::from(self.last_starting_item));
        store.set(NEXT_ITEM, Value::from(self.next_item));
        store.set(LIST_LENGTH, Value::from(self.list_length));
        store.set(
            REQUESTED_SECTION,
            self.requested_section
                .as_ref()
                .map_or(Value::Null, |s| Value::String(s.clone())),
        );
        store.set(CURRENT_STATE, Value::String(self.current_state.name().to_string()));
    }

    /// Back to the top of the list
    pub fn restart_list(&mut self) {
        self.next_item = 0;
        self.last_starting_item = 0;
    }

    /// Re-read the last batch without advancing
    pub fn rewind_to_last_batch(&mut self) {
        self.next_item = self.last_starting_item;
    }

    /// Move back one batch before the last one read
    pub fn step_back(&mut self) {
        self.next_item = self.last_starting_item.saturating_sub(HEADLINES_PER_TURN);
    }

    /// Record that `read` items starting at `next_item` were just read
    pub fn advance(&mut self, read: u32, list_length: u32) {
        self.last_starting_item = self.next_item;
        self.next_item = self.next_item.saturating_add(read);
        self.list_length = list_length;
    }

    /// Whether the pointer has run past the end of a known list
    pub fn at_end_of_list(&self) -> bool {
        self.list_length > 0 && self.next_item >= self.list_length
    }
}

fn read_pointer<S: SessionStore + ?Sized>(store: &S, key: &str) -> u32 {
    store
        .get(key)
        .and_then(Value::as_u64)
        .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

impl fmt::Display for DialogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state={} section={} next={} last_start={} len={}",
            self.current_state,
            self.requested_section.as_deref().unwrap_or("-"),
            self.next_item,
            self.last_starting_item,
            self.list_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::SessionAttributes;
    use serde_json::json;

    fn attributes(value: Value) -> SessionAttributes {
        SessionAttributes::from_value(value)
    }

    #[test]
    fn test_empty_store_loads_defaults() {
        let ctx = DialogContext::load(&SessionAttributes::default());
        assert_eq!(ctx, DialogContext::default());
        assert_eq!(ctx.current_state, DialogState::Init);
    }

    #[test]
    fn test_load_stored_attributes() {
        let store = attributes(json!({
            "lastStartingItem": 3,
            "nextItem": 6,
            "listLength": 20,
            "requestedSection": "world",
            "currentState": "IN_LIST"
        }));
        let ctx = DialogContext::load(&store);

        assert_eq!(ctx.current_state, DialogState::InList);
        assert_eq!(ctx.requested_section.as_deref(), Some("world"));
        assert_eq!(ctx.next_item, 6);
        assert_eq!(ctx.last_starting_item, 3);
        assert_eq!(ctx.list_length, 20);
    }

    #[test]
    fn test_corrupted_state_loads_as_unknown() {
        let ctx = DialogContext::load(&attributes(json!({ "currentState": "INVALID_STATE" })));
        assert_eq!(ctx.current_state, DialogState::Unknown);

        let ctx = DialogContext::load(&attributes(json!({ "currentState": 42 })));
        assert_eq!(ctx.current_state, DialogState::Unknown);
    }

    #[test]
    fn test_negative_pointers_load_as_zero() {
        let ctx = DialogContext::load(&attributes(json!({
            "nextItem": -4,
            "lastStartingItem": "three"
        })));
        assert_eq!(ctx.next_item, 0);
        assert_eq!(ctx.last_starting_item, 0);
    }

    #[test]
    fn test_store_then_load_preserves_fields() {
        let ctx = DialogContext {
            current_state: DialogState::Help,
            requested_section: Some("science".to_string()),
            next_item: 9,
            last_starting_item: 6,
            list_length: 12,
        };
        let mut store = SessionAttributes::default();
        ctx.store(&mut store);

        assert_eq!(store.get(CURRENT_STATE), Some(&json!("HELP")));
        assert_eq!(DialogContext::load(&store), ctx);
    }

    #[test]
    fn test_cleared_section_is_stored_as_null() {
        let mut store = attributes(json!({ "requestedSection": "arts" }));
        DialogContext::default().store(&mut store);
        assert_eq!(store.get(REQUESTED_SECTION), Some(&Value::Null));
    }

    #[test]
    fn test_step_back_saturates() {
        let mut ctx = DialogContext {
            last_starting_item: 2,
            next_item: 5,
            ..Default::default()
        };
        ctx.step_back();
        assert_eq!(ctx.next_item, 0);

        ctx.last_starting_item = 6;
        ctx.step_back();
        assert_eq!(ctx.next_item, 3);
    }

    #[test]
    fn test_advance_records_batch_start() {
        let mut ctx = DialogContext {
            next_item: 3,
            ..Default::default()
        };
        ctx.advance(3, 8);
        assert_eq!(ctx.last_starting_item, 3);
        assert_eq!(ctx.next_item, 6);
        assert_eq!(ctx.list_length, 8);
        assert!(!ctx.at_end_of_list());

        ctx.advance(2, 8);
        assert!(ctx.at_end_of_list());
    }
}
