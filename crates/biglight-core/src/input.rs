//! Text input presentation rules.

/// Visual state of a field, mutually exclusive by precedence
/// `Disabled > Error > Success > Default`
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FieldStatus {
    #[default]
    Default,
    Disabled,
    Error,
    Success,
}

impl FieldStatus {
    pub fn resolve(disabled: bool, error: bool, success: bool) -> Self {
        if disabled {
            FieldStatus::Disabled
        } else if error {
            FieldStatus::Error
        } else if success {
            FieldStatus::Success
        } else {
            FieldStatus::Default
        }
    }

    /// Modifier suffix used in class names
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Default => "default",
            FieldStatus::Disabled => "disabled",
            FieldStatus::Error => "error",
            FieldStatus::Success => "success",
        }
    }
}

/// Everything an Input render derives from its props and focus flag
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InputView {
    pub status: FieldStatus,
    /// Focused and not disabled
    pub focused: bool,
    pub has_value: bool,
    pub label_floats: bool,
    pub show_clear: bool,
    pub show_check: bool,
    /// Placeholder is only visible once the label has moved out of the way
    pub show_placeholder: bool,
}

impl InputView {
    pub fn derive(
        value: &str,
        focused: bool,
        disabled: bool,
        error: bool,
        success: bool,
        show_clear_button: bool,
    ) -> Self {
        let has_value = !value.is_empty();
        let label_floats = focused || has_value;
        Self {
            status: FieldStatus::resolve(disabled, error, success),
            focused: focused && !disabled,
            has_value,
            label_floats,
            show_clear: show_clear_button && has_value && !disabled && !success,
            show_check: success && !disabled,
            show_placeholder: label_floats,
        }
    }

    /// What activating the clear button does; `None` while it is hidden
    pub fn clear(&self) -> Option<ClearAction> {
        self.show_clear.then(|| ClearAction {
            value: String::new(),
            refocus: true,
        })
    }
}

/// Effect of the clear button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearAction {
    /// Reported through the field's change callback
    pub value: String,
    /// Focus goes back to the text field
    pub refocus: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_precedence() {
        assert_eq!(FieldStatus::resolve(true, true, true), FieldStatus::Disabled);
        assert_eq!(FieldStatus::resolve(false, true, true), FieldStatus::Error);
        assert_eq!(FieldStatus::resolve(false, false, true), FieldStatus::Success);
        assert_eq!(FieldStatus::resolve(false, false, false), FieldStatus::Default);
    }

    #[test]
    fn label_floats_on_focus_or_value() {
        assert!(!InputView::derive("", false, false, false, false, true).label_floats);
        assert!(InputView::derive("", true, false, false, false, true).label_floats);
        assert!(InputView::derive("x", false, false, false, false, true).label_floats);
    }

    #[test]
    fn clear_affordance_rules() {
        assert!(InputView::derive("x", false, false, false, false, true).show_clear);
        assert!(InputView::derive("x", false, false, true, false, true).show_clear);
        assert!(!InputView::derive("", false, false, false, false, true).show_clear);
        assert!(!InputView::derive("x", false, true, false, false, true).show_clear);
        assert!(!InputView::derive("x", false, false, false, true, true).show_clear);
        assert!(!InputView::derive("x", false, false, false, false, false).show_clear);
    }

    #[test]
    fn clear_empties_and_refocuses() {
        let view = InputView::derive("test@example.com", false, false, true, false, true);
        assert_eq!(
            view.clear(),
            Some(ClearAction {
                value: String::new(),
                refocus: true,
            })
        );
        assert_eq!(InputView::derive("", true, false, false, false, true).clear(), None);
        assert_eq!(InputView::derive("x", false, true, false, false, true).clear(), None);
    }

    #[test]
    fn success_shows_check_unless_disabled() {
        let view = InputView::derive("x", false, false, false, true, true);
        assert!(view.show_check);
        assert!(!view.show_clear);
        assert!(!InputView::derive("x", false, true, false, true, true).show_check);
    }

    #[test]
    fn disabled_is_never_focused() {
        let view = InputView::derive("", true, true, false, false, true);
        assert!(!view.focused);
        assert_eq!(view.status, FieldStatus::Disabled);
    }
}
