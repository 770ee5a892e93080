//! Biglight UI Components
//!
//! Dioxus components for the Biglight multi-brand design system.
//!
//! ## Brands
//!
//! Every component takes a [`Brand`](biglight_core::Brand) prop. The brand
//! only selects which custom-property scope is active (`brand-booker` or
//! `brand-venus`); all colours, radii and borders come from the token sets
//! in `biglight_core::theme`, rendered once by [`BiglightStyles`].
//!
//! ## Components
//!
//! - Icons: chevrons, clock, user, close, check
//! - [`Button`], [`Card`]
//! - [`Input`], [`Dropdown`]
//! - [`LoginMagicLink`], [`LoginDrawer`]

pub mod components;
pub mod document_host;
pub mod styles;

pub use components::*;
pub use document_host::EvalHost;
pub use styles::{stylesheet, BiglightStyles};
