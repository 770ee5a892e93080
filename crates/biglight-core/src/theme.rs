//! Design tokens per brand.
//!
//! Components never hard-code brand colours; they reference custom
//! properties such as `var(--btn-primary-bg)`. Each brand supplies a
//! [`TokenSet`] with a value for every name in [`TOKEN_NAMES`], and
//! [`Theme::stylesheet`] scopes those values under the brand class
//! (`.brand-booker { ... }`).

use std::fmt::Write;

use crate::brand::Brand;

/// Every token name the components reference, without the leading `--`.
pub const TOKEN_NAMES: &[&str] = &[
    // Colour aliases
    "color-primary-default",
    "color-neutral-black",
    "color-neutral-white",
    // Button
    "btn-radius",
    "btn-primary-bg",
    "btn-primary-text",
    "btn-primary-hover",
    "btn-primary-text-hover",
    "btn-secondary-bg",
    "btn-secondary-text",
    "btn-secondary-hover",
    "btn-secondary-text-hover",
    "btn-disabled-bg",
    "btn-disabled-text",
    // Card
    "card-bg",
    "card-text",
    "card-radius",
    // Dropdown
    "dropdown-border",
    "dropdown-focus-border",
    "dropdown-error-border",
    "dropdown-selected-bg",
    "dropdown-label",
    "dropdown-icon-active",
    "dropdown-item-hover-bg",
    "dropdown-disabled-bg",
    "dropdown-disabled-text",
    "dropdown-disabled-icon",
    "dropdown-required-asterisk",
    "dropdown-required-text",
    // Input
    "input-border",
    "input-focus-border",
    "input-filled-bg",
    "input-label",
    "input-icon-active",
    "input-error-border",
    "input-success-border",
    "input-disabled-bg",
    "input-disabled-text",
    "input-disabled-icon",
    "input-required-asterisk",
    "input-required-text",
];

/// Named design values for one brand
#[derive(Debug, PartialEq, Eq)]
pub struct TokenSet {
    brand: Brand,
    tokens: &'static [(&'static str, &'static str)],
}

impl TokenSet {
    /// Brand this set belongs to
    pub fn brand(&self) -> Brand {
        self.brand
    }

    /// Value of a token, by name without the leading `--`
    pub fn get(&self, name: &str) -> Option<&'static str> {
        let name = name.strip_prefix("--").unwrap_or(name);
        self.tokens
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Iterate `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.tokens.iter().copied()
    }

    /// Names from [`TOKEN_NAMES`] this set does not define
    pub fn missing(&self) -> Vec<&'static str> {
        TOKEN_NAMES
            .iter()
            .copied()
            .filter(|name| self.get(name).is_none())
            .collect()
    }

    /// Render the set as a CSS rule scoped to the brand class
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let _ = writeln!(css, ".{} {{", self.brand.class());
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  --{}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }
}

const BOOKER_TOKENS: &[(&str, &str)] = &[
    ("color-primary-default", "#00827f"),
    ("color-neutral-black", "#1a1a1a"),
    ("color-neutral-white", "#ffffff"),
    ("btn-radius", "9999px"),
    ("btn-primary-bg", "#00827f"),
    ("btn-primary-text", "#ffffff"),
    ("btn-primary-hover", "#003c3a"),
    ("btn-primary-text-hover", "#ffffff"),
    ("btn-secondary-bg", "#003c3a"),
    ("btn-secondary-text", "#ffffff"),
    ("btn-secondary-hover", "#00827f"),
    ("btn-secondary-text-hover", "#ffffff"),
    ("btn-disabled-bg", "#e5e5e5"),
    ("btn-disabled-text", "#8c8c8c"),
    ("card-bg", "#fff1e6"),
    ("card-text", "#003c3a"),
    ("card-radius", "16px"),
    ("dropdown-border", "#00827f"),
    ("dropdown-focus-border", "#00827f"),
    ("dropdown-error-border", "#d92d20"),
    ("dropdown-selected-bg", "#e6f4f3"),
    ("dropdown-label", "#6b6b6b"),
    ("dropdown-icon-active", "#00827f"),
    ("dropdown-item-hover-bg", "#e6f4f3"),
    ("dropdown-disabled-bg", "#f2f2f2"),
    ("dropdown-disabled-text", "#a3a3a3"),
    ("dropdown-disabled-icon", "#bfbfbf"),
    ("dropdown-required-asterisk", "#d92d20"),
    ("dropdown-required-text", "#6b6b6b"),
    ("input-border", "#00827f"),
    ("input-focus-border", "#00827f"),
    ("input-filled-bg", "#e6f4f3"),
    ("input-label", "#6b6b6b"),
    ("input-icon-active", "#00827f"),
    ("input-error-border", "#d92d20"),
    ("input-success-border", "#12b76a"),
    ("input-disabled-bg", "#f2f2f2"),
    ("input-disabled-text", "#a3a3a3"),
    ("input-disabled-icon", "#bfbfbf"),
    ("input-required-asterisk", "#d92d20"),
    ("input-required-text", "#6b6b6b"),
];

const VENUS_TOKENS: &[(&str, &str)] = &[
    ("color-primary-default", "#901438"),
    ("color-neutral-black", "#141414"),
    ("color-neutral-white", "#ffffff"),
    ("btn-radius", "4px"),
    ("btn-primary-bg", "#901438"),
    ("btn-primary-text", "#ffffff"),
    ("btn-primary-hover", "#4a0a1d"),
    ("btn-primary-text-hover", "#ffffff"),
    ("btn-secondary-bg", "#4a0a1d"),
    ("btn-secondary-text", "#ffffff"),
    ("btn-secondary-hover", "#901438"),
    ("btn-secondary-text-hover", "#ffffff"),
    ("btn-disabled-bg", "#e5e5e5"),
    ("btn-disabled-text", "#8c8c8c"),
    ("card-bg", "#fbe9ee"),
    ("card-text", "#4a0a1d"),
    ("card-radius", "8px"),
    ("dropdown-border", "#4a0a1d"),
    ("dropdown-focus-border", "#901438"),
    ("dropdown-error-border", "#d92d20"),
    ("dropdown-selected-bg", "#fbe9ee"),
    ("dropdown-label", "#6b6b6b"),
    ("dropdown-icon-active", "#901438"),
    ("dropdown-item-hover-bg", "#fbe9ee"),
    ("dropdown-disabled-bg", "#f2f2f2"),
    ("dropdown-disabled-text", "#a3a3a3"),
    ("dropdown-disabled-icon", "#bfbfbf"),
    ("dropdown-required-asterisk", "#d92d20"),
    ("dropdown-required-text", "#6b6b6b"),
    ("input-border", "#4a0a1d"),
    ("input-focus-border", "#901438"),
    ("input-filled-bg", "#fbe9ee"),
    ("input-label", "#6b6b6b"),
    ("input-icon-active", "#901438"),
    ("input-error-border", "#d92d20"),
    ("input-success-border", "#12b76a"),
    ("input-disabled-bg", "#f2f2f2"),
    ("input-disabled-text", "#a3a3a3"),
    ("input-disabled-icon", "#bfbfbf"),
    ("input-required-asterisk", "#d92d20"),
    ("input-required-text", "#6b6b6b"),
];

static BOOKER: TokenSet = TokenSet {
    brand: Brand::Booker,
    tokens: BOOKER_TOKENS,
};

static VENUS: TokenSet = TokenSet {
    brand: Brand::Venus,
    tokens: VENUS_TOKENS,
};

/// Brand to token-set lookup
pub struct Theme;

impl Theme {
    /// Token set for a brand
    pub fn for_brand(brand: Brand) -> &'static TokenSet {
        match brand {
            Brand::Booker => &BOOKER,
            Brand::Venus => &VENUS,
        }
    }

    /// Scoped custom-property rules for every brand
    pub fn stylesheet() -> String {
        Brand::all()
            .iter()
            .map(|brand| Self::for_brand(*brand).to_css())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
