//! Dropdown Component
//!
//! Single-select with a floating label. Interaction state lives in a
//! [`DropdownState`]; while the menu is open an [`OpenScope`] holds the
//! document listeners that deliver outside clicks and navigation keys.
//!
//! Keys pressed on the focused control while closed are handled directly
//! (so `prevent_default` can be called synchronously). Once open, keys
//! arrive through the document listener wherever focus is; the control
//! still suppresses the browser default of any key the open menu consumes.
//!
//! Only the field container and the menu count as inside for outside-click
//! dismissal. The required note below them does not.
//!
//! [`OpenScope`]: biglight_core::OpenScope

use biglight_core::{
    Brand, DocumentEvent, DropdownOutcome, DropdownState, NavKey, OptionList, ScopeSlot, ScopeSpec,
    SelectOption,
};
use dioxus::prelude::*;

use super::input::{field_class, label_class, wrapper_class, RequiredIndicator};
use super::{class_list, element_id, ChevronDownIcon};
use crate::document_host::EvalHost;

#[derive(Clone, PartialEq, Props)]
pub struct DropdownProps {
    #[props(default)]
    pub brand: Brand,
    #[props(into)]
    pub label: String,
    pub options: Vec<SelectOption>,
    /// Bound value; `None` means nothing is selected
    #[props(default)]
    pub value: Option<String>,
    /// Called with the chosen option's value
    pub on_change: EventHandler<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub error: bool,
    /// Optional prefix icon
    #[props(default)]
    pub icon: Option<Element>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Dropdown(props: DropdownProps) -> Element {
    let base_id = use_hook(|| element_id("dropdown"));
    let mut state = use_signal(DropdownState::new);
    let control_id = format!("{base_id}-control");
    let menu_id = format!("{base_id}-menu");
    let mut slot = use_signal({
        let inside = [control_id.clone(), menu_id.clone()];
        move || {
            let host = EvalHost::with_inside(inside).capturing_arrows();
            ScopeSlot::new(host, ScopeSpec::dropdown())
        }
    });

    // The document listener task outlives a single render, so it reads
    // props through these memos.
    let options = use_memo(use_reactive((&props.options,), |(options,)| {
        OptionList::dedup(options)
    }));
    let disabled = use_memo(use_reactive((&props.disabled,), |(disabled,)| disabled));

    let on_change = props.on_change;
    let apply = move |outcome: DropdownOutcome| match outcome {
        DropdownOutcome::Opened => tracing::debug!("dropdown opened"),
        DropdownOutcome::Closed => tracing::debug!("dropdown closed"),
        DropdownOutcome::Selected(index) => {
            let chosen = options.peek().get(index).map(|o| o.value.clone());
            if let Some(value) = chosen {
                tracing::debug!(%value, "dropdown option selected");
                on_change.call(value);
            }
        }
        DropdownOutcome::Moved(_) | DropdownOutcome::Ignored => {}
    };

    use_effect(move || {
        let open = state.read().is_open();
        if !slot.write().sync(open) {
            return;
        }
        let Some(mut eval) = slot.peek().handle().cloned() else {
            return;
        };
        spawn(async move {
            while let Ok(event) = eval.recv::<DocumentEvent>().await {
                let outcome = match event.nav_key() {
                    None => state.write().dismiss(),
                    Some(key) => {
                        let count = options.peek().len();
                        state.write().handle_key(key, count, *disabled.peek())
                    }
                };
                apply(outcome);
            }
        });
    });

    use_drop(move || {
        if let Ok(mut slot) = slot.try_write() {
            slot.sync(false);
        }
    });

    let current = state();
    let list = options();
    let value = props.value.as_deref().filter(|v| !v.is_empty());
    let visual = current.visual(props.disabled, props.error, value.is_some());
    let has_icon = props.icon.is_some();

    let container_class = field_class(
        "dropdown",
        visual.status,
        visual.focused,
        visual.has_value,
        has_icon,
        props.class.as_deref(),
    );
    let label_class = label_class(visual.label_floats, has_icon);
    let wrapper_class = wrapper_class(props.brand, "field-wrapper dropdown-wrapper");
    let chevron_class = class_list("dropdown-chevron", &[("is-open", visual.open)], None);
    let menu_class = class_list("dropdown-menu", &[("is-open", visual.open)], None);
    let display = list.display_label(value).to_string();
    let is_disabled = props.disabled;
    let tabindex = if is_disabled { "-1" } else { "0" };

    rsx! {
        div { class: "{wrapper_class}",
            div { id: "{control_id}", class: "{container_class}",
                label { class: "{label_class}", "{props.label}" }
                div {
                    class: "field-row dropdown-control",
                    role: "button",
                    tabindex: tabindex,
                    "aria-expanded": "{visual.open}",
                    "aria-haspopup": "listbox",
                    "aria-controls": "{menu_id}",
                    "aria-disabled": "{is_disabled}",
                    onclick: move |_| {
                        let outcome = state.write().toggle(is_disabled);
                        apply(outcome);
                    },
                    onfocus: move |_| state.write().focus(is_disabled),
                    onblur: move |_| state.write().blur(),
                    onkeydown: move |e: KeyboardEvent| {
                        let key = NavKey::from_key(&e.key().to_string());
                        let count = options.peek().len();
                        if state.peek().is_open() {
                            // The document listener applies the key
                            if state.peek().consumes_key(key, count, is_disabled) {
                                e.prevent_default();
                            }
                            return;
                        }
                        let outcome = state.write().handle_key(key, count, is_disabled);
                        if outcome.handled() {
                            e.prevent_default();
                        }
                        apply(outcome);
                    },
                    if let Some(icon) = &props.icon {
                        div { class: "field-icon", {icon.clone()} }
                    }
                    if visual.label_floats {
                        span { class: "dropdown-value", "{display}" }
                    } else {
                        span { class: "dropdown-placeholder", "{props.label}" }
                    }
                    div { class: "{chevron_class}", ChevronDownIcon {} }
                }
            }
            div { id: "{menu_id}", class: "{menu_class}", role: "listbox",
                for (index, option) in list.iter().enumerate() {
                    div {
                        key: "{option.value}",
                        class: class_list(
                            "dropdown-item",
                            &[
                                ("is-active", current.cursor() == Some(index)),
                                ("is-selected", OptionList::is_selected(option, value)),
                            ],
                            None,
                        ),
                        role: "option",
                        "aria-selected": OptionList::is_selected(option, value).to_string(),
                        onclick: move |_| {
                            let outcome = state.write().select(index);
                            apply(outcome);
                        },
                        onmouseenter: move |_| state.write().hover(index),
                        onmouseleave: move |_| state.write().leave(),
                        "{option.label}"
                    }
                }
            }
            if props.required {
                RequiredIndicator { disabled: is_disabled }
            }
        }
    }
}
