//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = DialogState> {
    proptest::sample::select(DialogState::ALL.to_vec())
}

fn arb_symbol() -> impl Strategy<Value = Symbol> {
    proptest::sample::select(Symbol::ALL.to_vec())
}

fn arb_paging_symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        Just(Symbol::Next),
        Just(Symbol::Previous),
        Just(Symbol::Repeat),
        Just(Symbol::StartOver),
        Just(Symbol::Yes),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: every transition lands in a declared, re-parseable state
    #[test]
    fn prop_transition_is_total(
        start in arb_state(),
        symbols in proptest::collection::vec(arb_symbol(), 0..30)
    ) {
        let mut state = start;
        for symbol in symbols {
            state = transition(state, symbol);
            prop_assert!(DialogState::ALL.contains(&state), "Undeclared state: {:?}", state);
            prop_assert_eq!(DialogState::from_name(state.name()), state);
        }
    }

    // Invariant 2: the machine never produces the Unknown sentinel
    #[test]
    fn prop_transition_never_yields_unknown(state in arb_state(), symbol in arb_symbol()) {
        prop_assert_ne!(transition(state, symbol), DialogState::Unknown);
    }

    // Invariant 3: transitions are deterministic
    #[test]
    fn prop_transition_is_deterministic(state in arb_state(), symbol in arb_symbol()) {
        prop_assert_eq!(transition(state, symbol), transition(state, symbol));
    }

    // Invariant 4: Cancel and Stop end the dialog from anywhere
    #[test]
    fn prop_cancel_always_ends(state in arb_state()) {
        prop_assert_eq!(transition(state, Symbol::Cancel), DialogState::Ended);
        prop_assert_eq!(transition(state, Symbol::Stop), DialogState::Ended);
    }

    // Invariant 5: Cancel is idempotent
    #[test]
    fn prop_cancel_idempotent(state in arb_state()) {
        let once = transition(state, Symbol::Cancel);
        prop_assert_eq!(transition(once, Symbol::Cancel), once);
    }

    // Invariant 6: StartList always reaches the reading state
    #[test]
    fn prop_start_list_always_reads(state in arb_state()) {
        prop_assert_eq!(transition(state, Symbol::StartList), DialogState::InList);
    }

    // Invariant 7: once reading, paging never leaves the list
    #[test]
    fn prop_paging_keeps_reading(symbols in proptest::collection::vec(arb_paging_symbol(), 1..20)) {
        let mut state = DialogState::InList;
        for symbol in symbols {
            state = transition(state, symbol);
            prop_assert_eq!(state, DialogState::InList);
        }
    }
}
