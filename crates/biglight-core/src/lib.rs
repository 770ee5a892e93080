//! Biglight Core Library
//!
//! Framework-free logic behind the Biglight component library.
//!
//! ## Overview
//!
//! Every interactive component in `biglight-ui` is a thin Dioxus shell around
//! a state machine that lives here, so the behaviour can be tested without a
//! renderer:
//!
//! - [`Brand`] and [`Theme`]: brand tag and the design-token lookup behind it
//! - [`DropdownState`]: open/closed, keyboard cursor and focus of a select
//! - [`FieldStatus`] and the input helpers: floating label and clear affordance
//! - [`MagicLinkForm`]: customer type + email with validation gating
//! - [`DrawerState`]: login drawer lifecycle
//! - [`OpenScope`] / [`ScopeSlot`]: document listeners and scroll lock held
//!   while open
//!
//! ## Quick Start
//!
//! ```
//! use biglight_core::{MagicLinkForm, TouchPolicy};
//!
//! let mut form = MagicLinkForm::new(TouchPolicy::OnAnyBlur);
//! assert!(!form.can_continue());
//!
//! form.set_customer_type(Some("retail".to_string()));
//! form.set_email("test@example.com");
//! assert!(form.can_continue());
//! ```

pub mod brand;
pub mod document;
pub mod drawer;
pub mod dropdown;
pub mod error;
pub mod form;
pub mod input;
pub mod options;
pub mod theme;

// Re-exports
pub use brand::Brand;
pub use document::{
    DocumentEvent, DocumentHost, ListenerKind, NavKey, OpenScope, ScopeSlot, ScopeSpec,
};
pub use drawer::{
    wait_for_focus_transfer, DrawerState, DrawerTransition, FOCUS_TRANSFER_DELAY,
};
pub use dropdown::{DropdownOutcome, DropdownState, DropdownVisual};
pub use error::{UiError, UiResult};
pub use form::{is_valid_email, MagicLinkForm, Submission, Touched, TouchPolicy};
pub use input::{ClearAction, FieldStatus, InputView};
pub use options::{default_customer_types, OptionList, SelectOption};
pub use theme::{Theme, TokenSet};
