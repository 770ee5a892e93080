//! LoginMagicLink Component
//!
//! Passwordless login form: customer type + email, gated Continue, a
//! password fallback and the "join" card.

use std::rc::Rc;

use biglight_core::{
    default_customer_types, Brand, MagicLinkForm, SelectOption, Submission, TouchPolicy,
};
use dioxus::prelude::*;

use super::{
    class_list, Button, ButtonIcon, ButtonSize, ButtonVariant, Card, CardVariant, CloseIcon,
    Dropdown, Input,
};

const TITLE: &str = "Log into your account";
const SUBTITLE: &str = "Please enter your email for a one-time-only code";
const CUSTOMER_TYPE_LABEL: &str = "Customer type";
const EMAIL_LABEL: &str = "Email";
const CONTINUE_LABEL: &str = "Continue";
const PASSWORD_LABEL: &str = "Login with your password";
const CARD_TITLE: &str = "Join the family.";
const CARD_BUTTON_LABEL: &str = "Become a member";

/// Every visible string of a [`LoginMagicLink`], for components that
/// render one on the caller's behalf (see `LoginDrawer`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicLinkText {
    pub title: String,
    pub subtitle: String,
    pub customer_type_label: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub continue_label: String,
    pub password_label: String,
    pub card_title: String,
    pub card_button_label: String,
}

impl Default for MagicLinkText {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            customer_type_label: CUSTOMER_TYPE_LABEL.to_string(),
            email_label: EMAIL_LABEL.to_string(),
            email_placeholder: String::new(),
            continue_label: CONTINUE_LABEL.to_string(),
            password_label: PASSWORD_LABEL.to_string(),
            card_title: CARD_TITLE.to_string(),
            card_button_label: CARD_BUTTON_LABEL.to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct LoginMagicLinkProps {
    #[props(default)]
    pub brand: Brand,
    #[props(into, default = TITLE.to_string())]
    pub title: String,
    #[props(into, default = SUBTITLE.to_string())]
    pub subtitle: String,
    #[props(into, default = CUSTOMER_TYPE_LABEL.to_string())]
    pub customer_type_label: String,
    #[props(default = default_customer_types())]
    pub customer_type_options: Vec<SelectOption>,
    #[props(into, default = EMAIL_LABEL.to_string())]
    pub email_label: String,
    #[props(into, default)]
    pub email_placeholder: String,
    #[props(into, default = CONTINUE_LABEL.to_string())]
    pub continue_label: String,
    #[props(into, default = PASSWORD_LABEL.to_string())]
    pub password_label: String,
    #[props(into, default = CARD_TITLE.to_string())]
    pub card_title: String,
    #[props(into, default = CARD_BUTTON_LABEL.to_string())]
    pub card_button_label: String,
    /// When the email field counts as touched
    #[props(default)]
    pub touch_policy: TouchPolicy,
    #[props(default)]
    pub on_close: Option<EventHandler<()>>,
    /// Receives the close button once mounted, for focus management
    #[props(default)]
    pub on_close_mounted: Option<EventHandler<Rc<MountedData>>>,
    /// Called with both values, only when the form is valid
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
pub fn LoginMagicLink(props: LoginMagicLinkProps) -> Element {
    let policy = props.touch_policy;
    let mut form = use_signal(move || MagicLinkForm::new(policy));

    let current = form.read().clone();
    let can_continue = current.can_continue();
    let email_error = current.email_error();
    let customer_type = current.customer_type_value().map(str::to_string);

    let container_class = class_list(
        &format!("{} login-magic-link", props.brand.class()),
        &[],
        props.class.as_deref(),
    );

    let on_close = props.on_close;
    let on_close_mounted = props.on_close_mounted;
    let on_continue = props.on_continue;
    let on_password_login = props.on_password_login;
    let on_join_family = props.on_join_family;

    rsx! {
        div { class: "{container_class}",
            button {
                class: "login-close",
                r#type: "button",
                "aria-label": "Close",
                onmounted: move |e| {
                    if let Some(handler) = &on_close_mounted {
                        handler.call(e.data());
                    }
                },
                onclick: move |_| {
                    if let Some(handler) = &on_close {
                        handler.call(());
                    }
                },
                CloseIcon {}
            }

            h1 { class: "login-title", "{props.title}" }
            p { class: "login-subtitle", "{props.subtitle}" }

            div { class: "login-field",
                Dropdown {
                    brand: props.brand,
                    label: props.customer_type_label.clone(),
                    options: props.customer_type_options.clone(),
                    value: customer_type,
                    on_change: move |value: String| {
                        form.write().set_customer_type(Some(value));
                    },
                }
            }

            div { class: "login-field",
                Input {
                    brand: props.brand,
                    label: props.email_label.clone(),
                    placeholder: props.email_placeholder.clone(),
                    value: current.email().to_string(),
                    error: email_error,
                    on_change: move |value: String| form.write().set_email(value),
                    on_blur: move |_| form.write().blur_email(),
                }
            }

            div { class: "login-action",
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Lg,
                    icon: ButtonIcon::None,
                    label: props.continue_label.clone(),
                    class: "w-full".to_string(),
                    disabled: !can_continue,
                    onclick: move |_| {
                        let submission = form.write().submit();
                        if let (Some(submission), Some(handler)) = (submission, &on_continue) {
                            handler.call(submission);
                        }
                    },
                }
            }

            div { class: "login-action login-action--last",
                Button {
                    variant: ButtonVariant::Tertiary,
                    size: ButtonSize::Lg,
                    icon: ButtonIcon::None,
                    label: props.password_label.clone(),
                    class: "w-full".to_string(),
                    onclick: move |_| {
                        if let Some(handler) = &on_password_login {
                            handler.call(());
                        }
                    },
                }
            }

            Card {
                title: props.card_title.clone(),
                button_label: props.card_button_label.clone(),
                variant: CardVariant::Primary,
                brand: props.brand,
                on_button_click: move |_| {
                    if let Some(handler) = &on_join_family {
                        handler.call(());
                    }
                },
            }
        }
    }
}
