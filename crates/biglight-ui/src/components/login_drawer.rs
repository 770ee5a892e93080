//! LoginDrawer Component
//!
//! Trigger button plus a slide-in dialog hosting [`LoginMagicLink`]. While
//! open the drawer holds the body scroll lock and a document Escape
//! listener; both go away on close and on unmount.

use std::rc::Rc;

use biglight_core::{
    default_customer_types, wait_for_focus_transfer, Brand, DocumentEvent, DrawerState, ScopeSlot,
    ScopeSpec, SelectOption, Submission, TouchPolicy,
};
use dioxus::prelude::*;

use super::{
    class_list, element_id, Button, ButtonIcon, ButtonSize, ButtonVariant, LoginMagicLink,
    MagicLinkText,
};
use crate::document_host::EvalHost;

#[derive(Clone, PartialEq, Props)]
pub struct LoginDrawerProps {
    #[props(default)]
    pub brand: Brand,
    /// Trigger button text
    #[props(into, default = "Log in".to_string())]
    pub button_label: String,
    #[props(default)]
    pub touch_policy: TouchPolicy,
    #[props(default = default_customer_types())]
    pub customer_type_options: Vec<SelectOption>,
    /// Text of the form inside the panel
    #[props(default)]
    pub text: MagicLinkText,
    /// Forwarded from the form; the drawer stays open
    #[props(default)]
    pub on_continue: Option<EventHandler<Submission>>,
    #[props(default)]
    pub on_password_login: Option<EventHandler<()>>,
    #[props(default)]
    pub on_join_family: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn LoginDrawer(props: LoginDrawerProps) -> Element {
    let root_id = use_hook(|| element_id("login-drawer"));
    let mut drawer = use_signal(DrawerState::new);
    let mut slot = use_signal({
        let root_id = root_id.clone();
        move || ScopeSlot::new(EvalHost::new(root_id), ScopeSpec::drawer())
    });
    let mut close_button: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    use_effect(move || {
        let open = drawer.read().is_open();
        if !slot.write().sync(open) {
            return;
        }

        if let Some(mut eval) = slot.peek().handle().cloned() {
            spawn(async move {
                while let Ok(event) = eval.recv::<DocumentEvent>().await {
                    if let Some(key) = event.nav_key() {
                        drawer.write().handle_key(key);
                    }
                }
            });
        }

        spawn(async move {
            if !wait_for_focus_transfer(|| drawer.peek().is_open()).await {
                return;
            }
            let target = close_button.peek().clone();
            if let Some(el) = target {
                if let Err(e) = el.set_focus(true).await {
                    tracing::warn!(error = ?e, "failed to focus drawer close button");
                }
            }
        });
    });

    use_drop(move || {
        if let Ok(mut slot) = slot.try_write() {
            slot.sync(false);
        }
    });

    let open = drawer.read().is_open();
    let container_class = class_list(
        &format!("{} login-drawer", props.brand.class()),
        &[],
        props.class.as_deref(),
    );
    let backdrop_class = class_list("drawer-backdrop", &[("is-open", open)], None);
    let panel_class = class_list("drawer-panel", &[("is-open", open)], None);

    let on_continue = props.on_continue;
    let text = &props.text;

    rsx! {
        div { id: "{root_id}", class: "{container_class}",
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Lg,
                icon: ButtonIcon::None,
                label: props.button_label.clone(),
                onclick: move |_| {
                    drawer.write().open();
                },
            }

            div {
                class: "{backdrop_class}",
                "aria-hidden": "true",
                onclick: move |_| {
                    drawer.write().close();
                },
            }

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "Login drawer",
                div { class: "drawer-scroll",
                    LoginMagicLink {
                        brand: props.brand,
                        touch_policy: props.touch_policy,
                        title: text.title.clone(),
                        subtitle: text.subtitle.clone(),
                        customer_type_label: text.customer_type_label.clone(),
                        customer_type_options: props.customer_type_options.clone(),
                        email_label: text.email_label.clone(),
                        email_placeholder: text.email_placeholder.clone(),
                        continue_label: text.continue_label.clone(),
                        password_label: text.password_label.clone(),
                        card_title: text.card_title.clone(),
                        card_button_label: text.card_button_label.clone(),
                        on_close: move |_| {
                            drawer.write().close();
                        },
                        on_close_mounted: move |el: Rc<MountedData>| close_button.set(Some(el)),
                        on_continue: move |submission: Submission| {
                            if let Some(handler) = &on_continue {
                                handler.call(submission);
                            }
                        },
                        on_password_login: props.on_password_login,
                        on_join_family: props.on_join_family,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_text_overrides_keep_other_defaults() {
        let text = MagicLinkText {
            title: "Welcome back".to_string(),
            email_placeholder: "name@example.com".to_string(),
            ..MagicLinkText::default()
        };
        assert_ne!(text, MagicLinkText::default());
        assert_eq!(text.title, "Welcome back");
        assert_eq!(text.continue_label, MagicLinkText::default().continue_label);
        assert_eq!(text.card_title, "Join the family.");
    }
}
