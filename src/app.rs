use biglight_core::Submission;
use biglight_ui::{BiglightStyles, LoginDrawer, MagicLinkText};
use dioxus::prelude::*;

use crate::showcase_config;

/// Root application component.
///
/// Provides the stylesheet and a single LoginDrawer for the configured
/// brand, plus a line reporting the last form event.
#[component]
pub fn App() -> Element {
    let config = use_hook(showcase_config);
    let mut last_event: Signal<Option<String>> = use_signal(|| None);
    let brand_class = config.brand.class();
    let mut text = MagicLinkText::default();
    if let Some(title) = &config.title {
        text.title = title.clone();
    }

    rsx! {
        BiglightStyles {}
        main { class: "{brand_class} showcase",
            style: "padding: 48px; display: flex; flex-direction: column; gap: 24px; align-items: flex-start;",
            LoginDrawer {
                brand: config.brand,
                button_label: config.button_label.clone(),
                touch_policy: config.touch_policy,
                text,
                on_continue: move |submission: Submission| {
                    tracing::info!(customer_type = %submission.customer_type, "continue");
                    last_event.set(Some(format!(
                        "Continue: {} / {}",
                        submission.customer_type, submission.email
                    )));
                },
                on_password_login: move |_| {
                    tracing::info!("password login requested");
                    last_event.set(Some("Password login".to_string()));
                },
                on_join_family: move |_| {
                    tracing::info!("join family requested");
                    last_event.set(Some("Become a member".to_string()));
                },
            }
            if let Some(event) = last_event() {
                p { class: "showcase-event", "{event}" }
            }
        }
    }
}
