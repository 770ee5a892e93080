//! Card Component
//!
//! Fixed-layout promotional panel: title and button on the left, graphic
//! on the right.

use biglight_core::Brand;
use dioxus::prelude::*;

use super::{class_list, Button, ButtonIcon, ButtonSize, ButtonVariant};

/// Card style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardVariant {
    #[default]
    Primary,
}

impl CardVariant {
    pub fn class(&self) -> &'static str {
        match self {
            CardVariant::Primary => "card-primary",
        }
    }
}

/// Properties for the Card component
#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    #[props(into)]
    pub title: String,
    #[props(into)]
    pub button_label: String,
    #[props(default)]
    pub variant: CardVariant,
    /// Overrides the brand's default button variant
    #[props(default)]
    pub button_variant: Option<ButtonVariant>,
    #[props(default)]
    pub brand: Brand,
    #[props(default)]
    pub on_button_click: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let variant = props
        .button_variant
        .unwrap_or_else(|| ButtonVariant::card_default(props.brand));
    let full_class = class_list("card", &[(props.variant.class(), true)], props.class.as_deref());
    let on_button_click = props.on_button_click;

    rsx! {
        div { class: "{full_class}",
            div { class: "card-body",
                h2 { class: "card-title", "{props.title}" }
                Button {
                    variant: variant,
                    size: ButtonSize::Md,
                    icon: ButtonIcon::User,
                    label: props.button_label.clone(),
                    class: "card-button".to_string(),
                    onclick: move |_| {
                        if let Some(handler) = &on_button_click {
                            handler.call(());
                        }
                    },
                }
            }
            div { class: "card-graphic",
                CardGraphic {}
            }
        }
    }
}

/// Decorative artwork for the card
#[component]
fn CardGraphic() -> Element {
    rsx! {
        svg {
            width: "130",
            height: "130",
            view_box: "0 0 130 130",
            role: "img",
            "aria-label": "Card graphic",
            circle { cx: "65", cy: "65", r: "60", fill: "var(--btn-primary-bg)", opacity: "0.15" }
            circle { cx: "65", cy: "52", r: "22", fill: "var(--btn-primary-bg)" }
            path {
                d: "M25 110C25 88 43 76 65 76C87 76 105 88 105 110",
                fill: "var(--card-text)",
            }
        }
    }
}
