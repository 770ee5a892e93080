//! Magic-link login form state and validation gating.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// Light email check: something, `@`, something, `.`, something, no spaces.
///
/// U+FEFF counts as whitespace here, as it does for an ECMAScript `\s`,
/// even though it is not Unicode `White_Space`.
pub fn is_valid_email(email: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    if email.is_empty() {
        return false;
    }
    let re = RE.get_or_init(|| {
        Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
            .expect("Invalid email regex")
    });
    re.is_match(email)
}

/// When a blur of the email field marks it touched (enabling error display)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum TouchPolicy {
    /// Every blur marks the field touched
    #[default]
    #[serde(rename = "any-blur")]
    OnAnyBlur,
    /// Only a blur with a non-empty value marks the field touched
    #[serde(rename = "non-empty-blur")]
    OnNonEmptyBlur,
}

impl TouchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TouchPolicy::OnAnyBlur => "any-blur",
            TouchPolicy::OnNonEmptyBlur => "non-empty-blur",
        }
    }

    fn touches_on_blur(&self, value: &str) -> bool {
        match self {
            TouchPolicy::OnAnyBlur => true,
            TouchPolicy::OnNonEmptyBlur => !value.is_empty(),
        }
    }
}

impl fmt::Display for TouchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TouchPolicy {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "any-blur" | "any" => Ok(TouchPolicy::OnAnyBlur),
            "non-empty-blur" | "non-empty" => Ok(TouchPolicy::OnNonEmptyBlur),
            other => Err(UiError::UnknownTouchPolicy(other.to_string())),
        }
    }
}

/// Per-field touched flags
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Touched {
    pub customer_type: bool,
    pub email: bool,
}

/// Values handed to `on_continue`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Submission {
    pub customer_type: String,
    pub email: String,
}

/// Customer type + email, owned by one LoginMagicLink instance
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct MagicLinkForm {
    customer_type: String,
    email: String,
    touched: Touched,
    policy: TouchPolicy,
}

impl MagicLinkForm {
    pub fn new(policy: TouchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn customer_type(&self) -> &str {
        &self.customer_type
    }

    /// Bound value for the Dropdown; empty means no selection
    pub fn customer_type_value(&self) -> Option<&str> {
        if self.customer_type.is_empty() {
            None
        } else {
            Some(&self.customer_type)
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn touched(&self) -> Touched {
        self.touched
    }

    pub fn policy(&self) -> TouchPolicy {
        self.policy
    }

    pub fn set_customer_type(&mut self, value: Option<String>) {
        self.customer_type = value.unwrap_or_default();
        self.touched.customer_type = true;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn blur_email(&mut self) {
        if self.policy.touches_on_blur(&self.email) {
            self.touched.email = true;
        }
    }

    pub fn email_valid(&self) -> bool {
        is_valid_email(&self.email)
    }

    /// Gating predicate for Continue
    pub fn can_continue(&self) -> bool {
        !self.customer_type.is_empty() && self.email_valid()
    }

    /// Whether the email field shows its error state
    pub fn email_error(&self) -> bool {
        self.touched.email && !self.email_valid()
    }

    /// Continue pressed: mark everything touched and return the values
    /// only if gating passes
    pub fn submit(&mut self) -> Option<Submission> {
        self.touched = Touched {
            customer_type: true,
            email: true,
        };
        if !self.can_continue() {
            tracing::debug!("magic link submission blocked by validation");
            return None;
        }
        tracing::debug!(customer_type = %self.customer_type, "magic link submitted");
        Some(Submission {
            customer_type: self.customer_type.clone(),
            email: self.email.clone(),
        })
    }
}
