//! Reusable UI components
//!
//! All components are brand-aware and style themselves through the
//! custom properties of the active brand scope:
//! - `btn-*` tokens for buttons
//! - `card-*` tokens for the promotional card
//! - `dropdown-*` / `input-*` tokens for form fields

mod button;
mod card;
mod dropdown;
mod icons;
mod input;
mod login_drawer;
mod login_magic_link;

pub use button::*;
pub use card::*;
pub use dropdown::*;
pub use icons::*;
pub use input::*;
pub use login_drawer::*;
pub use login_magic_link::*;

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique DOM id for elements that document listeners need to find
pub(crate) fn element_id(prefix: &str) -> String {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    format!("{}-{}", prefix, NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Join a base class with the modifiers whose flag is set
pub(crate) fn class_list(base: &str, modifiers: &[(&str, bool)], extra: Option<&str>) -> String {
    let mut class = base.to_string();
    for (modifier, on) in modifiers {
        if *on {
            class.push(' ');
            class.push_str(modifier);
        }
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_are_unique() {
        let a = element_id("dropdown");
        let b = element_id("dropdown");
        assert_ne!(a, b);
        assert!(a.starts_with("dropdown-"));
    }

    #[test]
    fn class_list_skips_unset_modifiers() {
        assert_eq!(
            class_list("dropdown", &[("is-open", true), ("has-value", false)], None),
            "dropdown is-open"
        );
        assert_eq!(class_list("btn", &[], Some("w-full")), "btn w-full");
        assert_eq!(class_list("btn", &[], Some("")), "btn");
    }
}
