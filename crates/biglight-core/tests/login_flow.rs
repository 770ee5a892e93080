//! Scenario tests for the login flow
//!
//! Drives the same state machines the Dioxus components use, in the order a
//! user would, with a recording document host standing in for the page.

mod common;

use std::cell::RefCell;
use std::time::Duration;

use biglight_core::{
    default_customer_types, wait_for_focus_transfer, DocumentEvent, DrawerState,
    DrawerTransition, DropdownOutcome, DropdownState, InputView, ListenerKind, MagicLinkForm, NavKey,
    OptionList, ScopeSlot, ScopeSpec, TouchPolicy, FOCUS_TRANSFER_DELAY,
};
use common::{HostCall, RecordingHost};

/// Dropdown wired to a scope slot the way the component wires it
struct DropdownHarness {
    state: DropdownState,
    options: OptionList,
    value: Option<String>,
    slot: ScopeSlot<RecordingHost>,
}

impl DropdownHarness {
    fn new(host: &RecordingHost) -> Self {
        Self {
            state: DropdownState::new(),
            options: OptionList::new(default_customer_types()).unwrap(),
            value: None,
            slot: ScopeSlot::new(host.clone(), ScopeSpec::dropdown()),
        }
    }

    fn apply(&mut self, outcome: DropdownOutcome) -> DropdownOutcome {
        if let DropdownOutcome::Selected(index) = outcome {
            self.value = self.options.get(index).map(|o| o.value.clone());
        }
        self.slot.sync(self.state.is_open());
        outcome
    }

    fn click_control(&mut self) -> DropdownOutcome {
        let outcome = self.state.toggle(false);
        self.apply(outcome)
    }

    fn click_option(&mut self, index: usize) -> DropdownOutcome {
        let outcome = self.state.select(index);
        self.apply(outcome)
    }

    fn document(&mut self, event: DocumentEvent) -> DropdownOutcome {
        let outcome = match event.nav_key() {
            Some(key) => self.state.handle_key(key, self.options.len(), false),
            None => self.state.dismiss(),
        };
        self.apply(outcome)
    }

    fn key(&mut self, key: &str) -> DropdownOutcome {
        self.document(DocumentEvent::Key {
            key: key.to_string(),
        })
    }
}

#[test]
fn continue_gating_follows_form_contract() {
    let mut form = MagicLinkForm::new(TouchPolicy::OnAnyBlur);
    assert!(!form.can_continue(), "disabled on initial render");

    form.set_customer_type(Some("retail".to_string()));
    form.set_email("test@example.com");
    assert!(form.can_continue(), "enabled with type and valid email");

    form.set_email("");
    assert!(!form.can_continue(), "disabled again once email cleared");
}

#[test]
fn clear_button_empties_email_and_blocks_continue() {
    let mut form = MagicLinkForm::new(TouchPolicy::OnAnyBlur);
    form.set_customer_type(Some("retail".to_string()));
    form.set_email("test@example.com");
    form.blur_email();
    assert!(form.can_continue());

    let view = InputView::derive(form.email(), false, false, form.email_error(), false, true);
    let action = view.clear().expect("clear button shown for a filled field");
    assert!(action.refocus);
    form.set_email(action.value);

    assert_eq!(form.email(), "");
    assert!(!form.can_continue());
    assert!(form.email_error());
    let view = InputView::derive(form.email(), true, false, form.email_error(), false, true);
    assert!(view.clear().is_none());
}

#[test]
fn space_on_open_dropdown_is_consumed_when_it_selects() {
    let host = RecordingHost::new();
    let mut dropdown = DropdownHarness::new(&host);
    dropdown.click_control();
    let count = dropdown.options.len();
    assert!(!dropdown.state.consumes_key(NavKey::Space, count, false));

    dropdown.key("ArrowDown");
    assert!(dropdown.state.consumes_key(NavKey::Space, count, false));
    assert_eq!(dropdown.key(" "), DropdownOutcome::Selected(0));
    assert_eq!(dropdown.value.as_deref(), Some("retail"));
}

#[test]
fn selecting_via_keyboard_updates_form() {
    let host = RecordingHost::new();
    let mut dropdown = DropdownHarness::new(&host);
    let mut form = MagicLinkForm::new(TouchPolicy::default());

    assert_eq!(dropdown.click_control(), DropdownOutcome::Opened);
    dropdown.key("ArrowDown");
    dropdown.key("ArrowDown");
    dropdown.key("ArrowDown");
    assert_eq!(dropdown.key("Enter"), DropdownOutcome::Selected(2));
    form.set_customer_type(dropdown.value.clone());

    assert_eq!(form.customer_type(), "hospitality");
    assert!(!dropdown.slot.is_held());
    assert!(host.active_listeners().is_empty());
}

#[test]
fn dropdown_listeners_exist_only_while_open() {
    let host = RecordingHost::new();
    let mut dropdown = DropdownHarness::new(&host);
    assert!(host.active_listeners().is_empty());

    dropdown.click_control();
    assert_eq!(
        host.active_listeners(),
        vec![ListenerKind::PointerDown, ListenerKind::KeyDown]
    );

    // Every exit path releases: outside click, Escape, option click, toggle
    dropdown.document(DocumentEvent::PointerDownOutside);
    assert!(host.active_listeners().is_empty());

    dropdown.key("ArrowDown");
    assert_eq!(host.active_listeners().len(), 2);
    dropdown.key("Escape");
    assert!(host.active_listeners().is_empty());

    dropdown.key("Enter");
    dropdown.click_option(4);
    assert!(host.active_listeners().is_empty());
    assert_eq!(dropdown.value.as_deref(), Some("online"));

    dropdown.click_control();
    dropdown.click_control();
    assert!(host.active_listeners().is_empty());

    assert_eq!(host.listen_count(), 4);
}

#[test]
fn outside_click_closes_and_clears_cursor() {
    let host = RecordingHost::new();
    let mut dropdown = DropdownHarness::new(&host);
    dropdown.click_control();
    dropdown.key("ArrowDown");
    assert_eq!(dropdown.state.cursor(), Some(0));

    assert_eq!(
        dropdown.document(DocumentEvent::PointerDownOutside),
        DropdownOutcome::Closed
    );
    assert!(!dropdown.state.is_open());
    assert_eq!(dropdown.state.cursor(), None);
    assert_eq!(dropdown.value, None);
}

#[test]
fn mouse_selection_ignores_keyboard_cursor() {
    let host = RecordingHost::new();
    let mut dropdown = DropdownHarness::new(&host);
    dropdown.click_control();
    dropdown.key("ArrowDown");
    assert_eq!(dropdown.click_option(3), DropdownOutcome::Selected(3));
    assert_eq!(dropdown.value.as_deref(), Some("catering"));
}

#[test]
fn unmount_while_open_releases() {
    let host = RecordingHost::new();
    {
        let mut dropdown = DropdownHarness::new(&host);
        dropdown.click_control();
        assert_eq!(host.active_listeners().len(), 2);
    }
    assert!(host.active_listeners().is_empty());
    assert_eq!(host.calls().last(), Some(&HostCall::Unlisten(1)));
}

#[test]
fn drawer_scroll_lock_and_escape_lifecycle() {
    let host = RecordingHost::new();
    let mut drawer = DrawerState::new();
    let mut slot = ScopeSlot::new(host.clone(), ScopeSpec::drawer());

    assert_eq!(drawer.open(), DrawerTransition::Opened);
    slot.sync(drawer.is_open());
    assert!(host.scroll_locked());
    assert_eq!(host.active_listeners(), vec![ListenerKind::KeyDown]);

    let escape = DocumentEvent::Key {
        key: "Escape".to_string(),
    };
    let key = escape.nav_key().unwrap_or(NavKey::Other);
    assert_eq!(drawer.handle_key(key), DrawerTransition::Closed);
    slot.sync(drawer.is_open());

    assert!(!host.scroll_locked());
    assert!(host.active_listeners().is_empty());
    assert_eq!(
        host.calls(),
        vec![
            HostCall::Listen(1, vec![ListenerKind::KeyDown]),
            HostCall::LockScroll(true),
            HostCall::Unlisten(1),
            HostCall::LockScroll(false),
        ]
    );
}

#[test]
fn drawer_reopen_acquires_fresh_scope() {
    let host = RecordingHost::new();
    let mut drawer = DrawerState::new();
    let mut slot = ScopeSlot::new(host.clone(), ScopeSpec::drawer());

    for _ in 0..3 {
        drawer.open();
        slot.sync(drawer.is_open());
        drawer.close();
        slot.sync(drawer.is_open());
    }
    assert_eq!(host.listen_count(), 3);
    assert!(!host.scroll_locked());
    assert!(host.active_listeners().is_empty());
}

#[test]
fn touch_policies_differ_only_on_empty_blur() {
    let mut any = MagicLinkForm::new(TouchPolicy::OnAnyBlur);
    let mut non_empty = MagicLinkForm::new(TouchPolicy::OnNonEmptyBlur);

    any.blur_email();
    non_empty.blur_email();
    assert!(any.email_error());
    assert!(!non_empty.email_error());

    any.set_email("bad");
    non_empty.set_email("bad");
    any.blur_email();
    non_empty.blur_email();
    assert!(any.email_error());
    assert!(non_empty.email_error());
}

#[tokio::test(start_paused = true)]
async fn drawer_closed_before_focus_transfer_skips_focus() {
    let _ = tracing_subscriber::fmt::try_init();

    let drawer = RefCell::new(DrawerState::new());
    drawer.borrow_mut().open();

    let focus = wait_for_focus_transfer(|| drawer.borrow().is_open());
    let close = async {
        tokio::time::sleep(Duration::from_millis(40)).await;
        drawer.borrow_mut().close();
    };
    let (should_focus, ()) = tokio::join!(focus, close);
    assert!(!should_focus);
}

#[tokio::test(start_paused = true)]
async fn drawer_still_open_after_delay_takes_focus() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut drawer = DrawerState::new();
    drawer.open();
    let start = tokio::time::Instant::now();
    assert!(wait_for_focus_transfer(|| drawer.is_open()).await);
    assert!(start.elapsed() >= FOCUS_TRANSFER_DELAY);
}
