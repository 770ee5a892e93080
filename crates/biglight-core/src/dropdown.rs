//! Dropdown open/cursor/focus state machine.
//!
//! States are `closed` and `open`. While open a keyboard cursor may point at
//! one option; every transition back to `closed` clears it.

use crate::document::NavKey;
use crate::input::FieldStatus;

/// What a single input did to the dropdown
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DropdownOutcome {
    /// Nothing changed; the event should propagate normally
    Ignored,
    /// closed -> open
    Opened,
    /// open -> closed without a selection
    Closed,
    /// Cursor moved to this index
    Moved(usize),
    /// Option at this index was chosen; the dropdown is now closed
    Selected(usize),
}

impl DropdownOutcome {
    /// Whether the triggering key event should call `prevent_default`
    pub fn handled(&self) -> bool {
        !matches!(self, DropdownOutcome::Ignored)
    }
}

/// Local interaction state of one Dropdown
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DropdownState {
    open: bool,
    cursor: Option<usize>,
    keyboard_focused: bool,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the hovered / keyboard-highlighted option
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_keyboard_focused(&self) -> bool {
        self.keyboard_focused
    }

    /// Click on the control
    pub fn toggle(&mut self, disabled: bool) -> DropdownOutcome {
        if disabled {
            return DropdownOutcome::Ignored;
        }
        self.cursor = None;
        if self.open {
            self.open = false;
            DropdownOutcome::Closed
        } else {
            self.open = true;
            DropdownOutcome::Opened
        }
    }

    /// Keyboard navigation over `option_count` options
    pub fn handle_key(
        &mut self,
        key: NavKey,
        option_count: usize,
        disabled: bool,
    ) -> DropdownOutcome {
        if disabled {
            return DropdownOutcome::Ignored;
        }

        match key {
            NavKey::Escape => self.close(),
            NavKey::Enter | NavKey::Space => {
                if !self.open {
                    self.open = true;
                    return DropdownOutcome::Opened;
                }
                match self.cursor {
                    Some(index) if index < option_count => self.select(index),
                    _ => DropdownOutcome::Ignored,
                }
            }
            NavKey::ArrowDown => {
                if !self.open {
                    self.open = true;
                    return DropdownOutcome::Opened;
                }
                if option_count == 0 {
                    return DropdownOutcome::Ignored;
                }
                let next = match self.cursor {
                    None => 0,
                    Some(i) => (i + 1).min(option_count - 1),
                };
                self.cursor = Some(next);
                DropdownOutcome::Moved(next)
            }
            NavKey::ArrowUp => {
                if !self.open || option_count == 0 {
                    return DropdownOutcome::Ignored;
                }
                let prev = match self.cursor {
                    None => option_count - 1,
                    Some(i) => i.saturating_sub(1).min(option_count - 1),
                };
                self.cursor = Some(prev);
                DropdownOutcome::Moved(prev)
            }
            NavKey::Other => DropdownOutcome::Ignored,
        }
    }

    /// Whether an open dropdown acts on `key`, so the key's browser
    /// default (Space and the arrows scroll) has to be suppressed.
    ///
    /// Agrees with [`DropdownState::handle_key`] reporting the key as
    /// handled, without changing any state.
    pub fn consumes_key(&self, key: NavKey, option_count: usize, disabled: bool) -> bool {
        if disabled || !self.open {
            return false;
        }
        match key {
            NavKey::Escape => true,
            NavKey::ArrowDown | NavKey::ArrowUp => option_count > 0,
            k if k.is_activate() => self.cursor.is_some_and(|i| i < option_count),
            _ => false,
        }
    }

    /// Choose the option at `index` (mouse click or keyboard activation)
    pub fn select(&mut self, index: usize) -> DropdownOutcome {
        self.open = false;
        self.cursor = None;
        DropdownOutcome::Selected(index)
    }

    /// Pointer-down outside the control and menu
    pub fn dismiss(&mut self) -> DropdownOutcome {
        self.close()
    }

    fn close(&mut self) -> DropdownOutcome {
        self.cursor = None;
        if self.open {
            self.open = false;
            DropdownOutcome::Closed
        } else {
            DropdownOutcome::Ignored
        }
    }

    /// Mouse entered the option at `index`
    pub fn hover(&mut self, index: usize) {
        self.cursor = Some(index);
    }

    /// Mouse left an option
    pub fn leave(&mut self) {
        self.cursor = None;
    }

    /// Control received focus
    pub fn focus(&mut self, disabled: bool) {
        if !disabled {
            self.keyboard_focused = true;
        }
    }

    /// Control lost focus
    pub fn blur(&mut self) {
        self.keyboard_focused = false;
    }

    /// Label sits on the border instead of in the value slot
    pub fn label_floats(&self, has_value: bool) -> bool {
        self.open || has_value || self.keyboard_focused
    }

    /// Derived presentation flags
    pub fn visual(&self, disabled: bool, error: bool, has_value: bool) -> DropdownVisual {
        DropdownVisual {
            status: FieldStatus::resolve(disabled, error, false),
            open: self.open,
            focused: (self.open || self.keyboard_focused) && !disabled,
            has_value,
            label_floats: self.label_floats(has_value),
        }
    }
}

/// Presentation flags for one render of a Dropdown
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DropdownVisual {
    /// `Disabled > Error > Default`; dropdowns have no success state
    pub status: FieldStatus,
    pub open: bool,
    pub focused: bool,
    pub has_value: bool,
    pub label_floats: bool,
}
