//! Button Components
//!
//! Branded buttons on three axes:
//! - Variant: primary (brand fill), secondary (dark fill), tertiary (outline)
//! - Size: `md` or `lg`
//! - Icon decoration: leading user glyph, surrounding chevrons, or none

use biglight_core::Brand;
use dioxus::prelude::*;

use super::{class_list, ChevronLeftIcon, ChevronRightIcon, UserIcon};

/// Label shown when a button is given no text
pub const DEFAULT_BUTTON_LABEL: &str = "Button label";

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Brand colour fill, darkens on hover
    #[default]
    Primary,
    /// Dark fill, brand colour on hover
    Secondary,
    /// White with a dark outline, fills dark on hover
    Tertiary,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Tertiary => "btn-tertiary",
        }
    }

    /// Variant the Card uses for its button when none is given.
    ///
    /// This is the one place brand changes behaviour rather than colours.
    pub fn card_default(brand: Brand) -> Self {
        match brand {
            Brand::Booker => ButtonVariant::Primary,
            Brand::Venus => ButtonVariant::Tertiary,
        }
    }
}

/// Button heights
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

/// Icon decoration around the label
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonIcon {
    /// Leading user glyph
    User,
    /// Chevrons on both sides
    #[default]
    Chevrons,
    None,
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub icon: ButtonIcon,
    /// Button text; empty falls back to [`DEFAULT_BUTTON_LABEL`]
    #[props(into, default)]
    pub label: String,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Branded button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Secondary,
///         size: ButtonSize::Lg,
///         icon: ButtonIcon::None,
///         label: "Continue",
///         disabled: !form.read().can_continue(),
///         onclick: move |_| submit(),
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(
        "btn",
        &[(props.variant.class(), true), (props.size.class(), true)],
        props.class.as_deref(),
    );
    let label = if props.label.is_empty() {
        DEFAULT_BUTTON_LABEL.to_string()
    } else {
        props.label.clone()
    };
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {match props.icon {
                ButtonIcon::User => rsx! {
                    UserIcon {}
                    span { class: "btn-label", "{label}" }
                },
                ButtonIcon::Chevrons => rsx! {
                    ChevronLeftIcon {}
                    span { class: "btn-label", "{label}" }
                    ChevronRightIcon {}
                },
                ButtonIcon::None => rsx! {
                    span { class: "btn-label", "{label}" }
                },
            }}
        }
    }
}
