//! Input Component
//!
//! Controlled text field with a floating label. The parent owns the value;
//! the field owns only its focus flag.

use std::rc::Rc;

use biglight_core::{Brand, FieldStatus, InputView};
use dioxus::prelude::*;

use super::{class_list, CheckIcon, CloseIcon};

/// Outer wrapper class; the brand scope makes the field's tokens resolve
/// even without a branded ancestor
pub(crate) fn wrapper_class(brand: Brand, base: &str) -> String {
    format!("{} {base}", brand.class())
}

/// Container class for a bordered form field (shared with Dropdown)
pub(crate) fn field_class(
    base: &str,
    status: FieldStatus,
    focused: bool,
    has_value: bool,
    has_icon: bool,
    extra: Option<&str>,
) -> String {
    let status_class = format!("field--{}", status.as_str());
    class_list(
        &format!("field {base}"),
        &[
            (status_class.as_str(), true),
            ("is-focused", focused),
            ("has-value", has_value),
            ("has-icon", has_icon),
        ],
        extra,
    )
}

/// Class for the floating label
pub(crate) fn label_class(floats: bool, has_icon: bool) -> String {
    class_list(
        "field-label",
        &[("is-floating", floats), ("has-icon", has_icon)],
        None,
    )
}

#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    #[props(default)]
    pub brand: Brand,
    #[props(into)]
    pub label: String,
    /// Current value; the parent owns it
    #[props(into, default)]
    pub value: String,
    /// Called with the new value on every edit, and with `""` on clear
    pub on_change: EventHandler<String>,
    #[props(default)]
    pub on_blur: Option<EventHandler<()>>,
    /// Shown only while the label floats
    #[props(into, default)]
    pub placeholder: String,
    /// HTML input type (text, email, ...)
    #[props(into, default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub error: bool,
    #[props(default = false)]
    pub success: bool,
    #[props(default = true)]
    pub show_clear_button: bool,
    /// Optional prefix icon
    #[props(default)]
    pub icon: Option<Element>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Input(props: InputProps) -> Element {
    let mut focused = use_signal(|| false);
    let mut field: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let view = InputView::derive(
        &props.value,
        focused(),
        props.disabled,
        props.error,
        props.success,
        props.show_clear_button,
    );
    let has_icon = props.icon.is_some();
    let container_class = field_class(
        "input",
        view.status,
        view.focused,
        view.has_value,
        has_icon,
        props.class.as_deref(),
    );
    let label_class = label_class(view.label_floats, has_icon);
    let wrapper_class = wrapper_class(props.brand, "field-wrapper");
    let placeholder = if view.show_placeholder {
        props.placeholder.clone()
    } else {
        String::new()
    };

    let disabled = props.disabled;
    let on_change = props.on_change;
    let on_blur = props.on_blur;

    let focus_field = move || {
        if let Some(el) = field.peek().clone() {
            spawn(async move {
                if let Err(e) = el.set_focus(true).await {
                    tracing::warn!(error = ?e, "failed to focus input");
                }
            });
        }
    };

    rsx! {
        div { class: "{wrapper_class}",
            div {
                class: "{container_class}",
                onclick: move |_| {
                    if !disabled {
                        focus_field();
                    }
                },
                label { class: "{label_class}", "{props.label}" }
                div { class: "field-row",
                    if let Some(icon) = &props.icon {
                        div { class: "field-icon", {icon.clone()} }
                    }
                    input {
                        class: "field-control",
                        r#type: "{props.input_type}",
                        value: "{props.value}",
                        placeholder: "{placeholder}",
                        disabled: disabled,
                        "aria-invalid": "{props.error}",
                        "aria-disabled": "{disabled}",
                        onmounted: move |e| field.set(Some(e.data())),
                        onfocus: move |_| {
                            if !disabled {
                                focused.set(true);
                            }
                        },
                        onblur: move |_| {
                            focused.set(false);
                            if let Some(handler) = &on_blur {
                                handler.call(());
                            }
                        },
                        oninput: move |e| on_change.call(e.value()),
                    }
                    if let Some(action) = view.clear() {
                        button {
                            class: "field-clear",
                            r#type: "button",
                            tabindex: "-1",
                            "aria-label": "Clear input",
                            onclick: move |e| {
                                e.stop_propagation();
                                on_change.call(action.value.clone());
                                if action.refocus {
                                    focus_field();
                                }
                            },
                            CloseIcon { size: 20 }
                        }
                    }
                    if view.show_check {
                        div { class: "field-check", CheckIcon {} }
                    }
                }
            }
            if props.required {
                RequiredIndicator { disabled }
            }
        }
    }
}

/// "* required" note under a field
#[component]
pub(crate) fn RequiredIndicator(disabled: bool) -> Element {
    let text_class = class_list("field-required-text", &[("is-disabled", disabled)], None);
    rsx! {
        div { class: "field-required",
            span { class: "field-required-asterisk", "*" }
            span { class: "{text_class}", "required" }
        }
    }
}
