//! Property-based tests for the interaction state machines
//!
//! Uses proptest to check the Dropdown cursor and selection invariants and
//! the email predicate over generated inputs.

use proptest::prelude::*;
use biglight_core::{is_valid_email, DropdownOutcome, DropdownState, NavKey, OptionList, SelectOption};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Option lists with unique values
fn options_strategy() -> impl Strategy<Value = Vec<SelectOption>> {
    prop::collection::hash_set("[a-z]{1,8}", 1..12).prop_map(|values| {
        values
            .into_iter()
            .map(|v| SelectOption::new(v.clone(), v.to_uppercase()))
            .collect()
    })
}

fn key_strategy() -> impl Strategy<Value = NavKey> {
    prop_oneof![
        Just(NavKey::Enter),
        Just(NavKey::Space),
        Just(NavKey::ArrowDown),
        Just(NavKey::ArrowUp),
        Just(NavKey::Escape),
        Just(NavKey::Other),
    ]
}

/// Whitespace an ECMAScript `\s` matches, including U+FEFF
fn whitespace_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        Just(' '),
        Just('\t'),
        Just('\n'),
        Just('\u{a0}'),
        Just('\u{2028}'),
        Just('\u{3000}'),
        Just('\u{feff}'),
    ]
}

/// Inputs a user can give a dropdown
#[derive(Debug, Clone)]
enum Input {
    Key(NavKey),
    Toggle,
    Hover(usize),
    Leave,
    Dismiss,
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => key_strategy().prop_map(Input::Key),
        1 => Just(Input::Toggle),
        1 => (0..20usize).prop_map(Input::Hover),
        1 => Just(Input::Leave),
        1 => Just(Input::Dismiss),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Opening then pressing ArrowDown n times lands on min(n-1, len-1)
    #[test]
    fn arrow_down_cursor_position(len in 1..30usize, n in 1..60usize) {
        let mut state = DropdownState::new();
        state.toggle(false);
        for _ in 0..n {
            state.handle_key(NavKey::ArrowDown, len, false);
        }
        prop_assert_eq!(state.cursor(), Some((n - 1).min(len - 1)));
    }

    /// ArrowUp moves toward zero and never below
    #[test]
    fn arrow_up_never_below_zero(len in 1..30usize, down in 1..30usize, up in 0..60usize) {
        let mut state = DropdownState::new();
        state.toggle(false);
        for _ in 0..down {
            state.handle_key(NavKey::ArrowDown, len, false);
        }
        let start = state.cursor().unwrap();
        for _ in 0..up {
            state.handle_key(NavKey::ArrowUp, len, false);
        }
        prop_assert_eq!(state.cursor(), Some(start.saturating_sub(up)));
    }

    /// At most one option is selected, and it is the one matching the value
    #[test]
    fn at_most_one_selected(options in options_strategy(), pick in any::<prop::sample::Index>(), miss in any::<bool>()) {
        let list = OptionList::new(options).unwrap();
        let value = if miss {
            "NOT-A-VALUE".to_string()
        } else {
            list.get(pick.index(list.len())).unwrap().value.clone()
        };

        let selected: Vec<_> = list
            .iter()
            .filter(|o| OptionList::is_selected(o, Some(&value)))
            .collect();

        prop_assert!(selected.len() <= 1);
        if miss {
            prop_assert!(selected.is_empty());
        } else {
            prop_assert_eq!(&selected[0].value, &value);
        }
        prop_assert!(list.iter().all(|o| !OptionList::is_selected(o, None)));
    }

    /// Whatever the input sequence, the cursor stays in range, a closed
    /// dropdown never holds a cursor, and selections are valid indices
    #[test]
    fn random_inputs_keep_invariants(len in 0..10usize, inputs in prop::collection::vec(input_strategy(), 0..80)) {
        let mut state = DropdownState::new();
        for input in inputs {
            let outcome = match input {
                Input::Key(key) => state.handle_key(key, len, false),
                Input::Toggle => state.toggle(false),
                Input::Hover(i) if state.is_open() && i < len => { state.hover(i); DropdownOutcome::Moved(i) }
                Input::Hover(_) => DropdownOutcome::Ignored,
                Input::Leave => { state.leave(); DropdownOutcome::Ignored }
                Input::Dismiss => state.dismiss(),
            };
            if let DropdownOutcome::Selected(i) = outcome {
                prop_assert!(i < len);
                prop_assert!(!state.is_open());
            }
            if !state.is_open() {
                prop_assert_eq!(state.cursor(), None);
            }
            if let Some(c) = state.cursor() {
                prop_assert!(c < len);
            }
        }
    }

    /// `consumes_key` predicts whether an open dropdown handles a key
    #[test]
    fn consumes_key_matches_open_handling(
        inputs in prop::collection::vec(input_strategy(), 0..30),
        key in key_strategy(),
        len in 0usize..6,
        disabled in any::<bool>(),
    ) {
        let mut state = DropdownState::new();
        for input in inputs {
            match input {
                Input::Key(key) => { state.handle_key(key, len, false); }
                Input::Toggle => { state.toggle(false); }
                Input::Hover(i) => state.hover(i),
                Input::Leave => state.leave(),
                Input::Dismiss => { state.dismiss(); }
            }
        }
        let predicted = state.consumes_key(key, len, disabled);
        let was_open = state.is_open();
        let handled = state.handle_key(key, len, disabled).handled();
        if was_open {
            prop_assert_eq!(predicted, handled);
        } else {
            prop_assert!(!predicted);
        }
    }

    /// Disabled dropdowns never open
    #[test]
    fn disabled_never_opens(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut state = DropdownState::new();
        for key in keys {
            prop_assert_eq!(state.handle_key(key, 5, true), DropdownOutcome::Ignored);
            prop_assert_eq!(state.toggle(true), DropdownOutcome::Ignored);
        }
        prop_assert!(!state.is_open());
    }

    /// local@domain.tld built from non-space, non-@ parts is always valid
    #[test]
    fn well_formed_emails_pass(local in "[a-z0-9._+-]{1,12}", domain in "[a-z0-9-]{1,12}", tld in "[a-z]{2,6}") {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }

    /// Anything containing whitespace is rejected, wherever it sits
    #[test]
    fn whitespace_emails_fail(
        a in "[a-z]{1,6}",
        b in "[a-z]{1,6}",
        ws in whitespace_strategy(),
        at in 0usize..4,
    ) {
        let email = match at {
            0 => format!("{a}{ws}@{b}.com"),
            1 => format!("{a}@{b}{ws}.com"),
            2 => format!("{ws}{a}@{b}.com"),
            _ => format!("{a}@{b}.com{ws}"),
        };
        prop_assert!(!is_valid_email(&email));
    }

    /// Strings without an @ are never valid
    #[test]
    fn missing_at_fails(s in "[^@]{0,30}") {
        prop_assert!(!is_valid_email(&s));
    }
}
