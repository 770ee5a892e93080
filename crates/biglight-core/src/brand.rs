//! Brand tag threaded through every component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// A named visual theme selecting a CSS variable scope
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    /// Brand A in the token sets
    #[default]
    Booker,
    /// Brand B in the token sets
    Venus,
}

impl Brand {
    /// All brands, in token-set order
    pub fn all() -> &'static [Brand] {
        &[Brand::Booker, Brand::Venus]
    }

    /// Lowercase identifier (`booker`, `venus`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Booker => "booker",
            Brand::Venus => "venus",
        }
    }

    /// Scope class that activates this brand's custom properties
    pub fn class(&self) -> &'static str {
        match self {
            Brand::Booker => "brand-booker",
            Brand::Venus => "brand-venus",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "booker" | "brand-booker" | "brand-a" | "branda" => Ok(Brand::Booker),
            "venus" | "brand-venus" | "brand-b" | "brandb" => Ok(Brand::Venus),
            _ => Err(UiError::UnknownBrand(s.to_string())),
        }
    }
}
