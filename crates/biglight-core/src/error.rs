//! Error types for Biglight

use thiserror::Error;

/// Main error type for Biglight operations
///
/// Form validation failures are not errors; they are reported through
/// [`crate::MagicLinkForm::email_error`] as a UI state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// Brand name did not match any known theme
    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    /// Two options in the same list share a value
    #[error("Duplicate option value: {0}")]
    DuplicateOptionValue(String),

    /// Touch policy name was not recognised
    #[error("Unknown touch policy: {0}")]
    UnknownTouchPolicy(String),

    /// Document host failed to install or remove listeners
    #[error("Document error: {0}")]
    Document(String),
}

/// Result type alias using UiError
pub type UiResult<T> = Result<T, UiError>;
