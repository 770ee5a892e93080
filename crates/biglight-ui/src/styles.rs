//! Component CSS.
//!
//! Rules here only reference brand tokens through `var(--token)`; the
//! values come from the `.brand-*` blocks rendered by
//! [`Theme::stylesheet`].

use biglight_core::Theme;
use dioxus::prelude::*;

pub const COMPONENT_STYLES: &str = r#"
/* === Reset === */
*, *::before, *::after {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: 'Inter', system-ui, sans-serif;
  color: var(--color-neutral-black);
  background: var(--color-neutral-white);
}

.icon {
  display: inline-block;
  flex-shrink: 0;
}

.w-full {
  width: 100%;
}

/* === Button === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 8px;
  border: 2px solid transparent;
  border-radius: var(--btn-radius);
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background-color 150ms ease, color 150ms ease;
}

.btn-md { height: 40px; padding: 0 16px; font-size: 0.875rem; }
.btn-lg { height: 52px; padding: 0 24px; font-size: 1rem; }

.btn-primary {
  background: var(--btn-primary-bg);
  color: var(--btn-primary-text);
}
.btn-primary:hover:not(:disabled) {
  background: var(--btn-primary-hover);
  color: var(--btn-primary-text-hover);
}

.btn-secondary {
  background: var(--btn-secondary-bg);
  color: var(--btn-secondary-text);
}
.btn-secondary:hover:not(:disabled) {
  background: var(--btn-secondary-hover);
  color: var(--btn-secondary-text-hover);
}

.btn-tertiary {
  background: var(--color-neutral-white);
  color: var(--color-neutral-black);
  border-color: var(--color-neutral-black);
}
.btn-tertiary:hover:not(:disabled) {
  background: var(--color-neutral-black);
  color: var(--color-neutral-white);
}

.btn:disabled {
  background: var(--btn-disabled-bg);
  color: var(--btn-disabled-text);
  border-color: var(--btn-disabled-bg);
  cursor: not-allowed;
}

.btn:focus-visible {
  outline: 2px solid var(--color-primary-default);
  outline-offset: 2px;
}

/* === Card === */
.card {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 16px;
  padding: 24px;
  border-radius: var(--card-radius);
  background: var(--card-bg);
  color: var(--card-text);
}

.card-body {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 16px;
}

.card-title {
  margin: 0;
  font-size: 1.5rem;
  font-weight: 600;
}

/* === Form fields (Input, Dropdown) === */
.field-wrapper {
  position: relative;
  width: 100%;
}

.field {
  position: relative;
  width: 100%;
  height: 56px;
  border: 1px solid var(--input-border);
  border-radius: 5px;
  background: var(--color-neutral-white);
  transition: border-color 200ms ease, box-shadow 200ms ease;
}

.dropdown { border-color: var(--dropdown-border); }

.field.has-value { border-width: 2px; }
.input.has-value:not(.is-focused) { background: var(--input-filled-bg); }
.dropdown.has-value:not(.is-focused) { background: var(--dropdown-selected-bg); }

.input.is-focused {
  border-color: var(--input-focus-border);
  box-shadow: 0 0 0 1px var(--input-focus-border);
}
.dropdown.is-focused {
  border-color: var(--dropdown-focus-border);
  box-shadow: 0 0 0 1px var(--dropdown-focus-border);
}

.input.field--error { border-color: var(--input-error-border); }
.input.field--error.is-focused { box-shadow: 0 0 0 1px var(--input-error-border); }
.dropdown.field--error { border-color: var(--dropdown-error-border); }

.input.field--success { border-width: 2px; border-color: var(--input-success-border); }

.input.field--disabled {
  background: var(--input-disabled-bg);
  border-color: var(--input-disabled-bg);
  cursor: not-allowed;
}
.dropdown.field--disabled {
  background: var(--dropdown-disabled-bg);
  border-color: var(--dropdown-disabled-bg);
  cursor: not-allowed;
}

.field-row {
  display: flex;
  align-items: center;
  gap: 12px;
  height: 100%;
  padding: 0 16px;
}
.field.has-icon .field-row { padding-left: 12px; }

.field-label {
  position: absolute;
  left: 16px;
  top: 50%;
  transform: translateY(-50%);
  font-size: 1rem;
  color: var(--input-label);
  pointer-events: none;
  transition: all 300ms ease-in-out;
}
.dropdown .field-label { color: var(--dropdown-label); }
.field-label.has-icon { left: 48px; }
.field-label.is-floating {
  top: 0;
  left: 12px;
  padding: 0 4px;
  font-size: 0.75rem;
  background: var(--color-neutral-white);
  color: var(--input-icon-active);
  z-index: 1;
}
.dropdown .field-label.is-floating { color: var(--dropdown-icon-active); }
.input.field--error .field-label.is-floating { color: var(--input-error-border); }
.field--disabled .field-label { background: transparent; color: var(--input-disabled-text); }
.dropdown.field--disabled .field-label { color: var(--dropdown-disabled-text); }

.field-icon { display: flex; color: var(--input-icon-active); }
.dropdown .field-icon { color: var(--dropdown-icon-active); }
.input.field--disabled .field-icon { color: var(--input-disabled-icon); }
.dropdown.field--disabled .field-icon { color: var(--dropdown-disabled-icon); }

.field-control {
  flex: 1;
  min-width: 0;
  border: none;
  outline: none;
  background: transparent;
  font: inherit;
  color: var(--color-neutral-black);
}
.field-control::placeholder { color: var(--input-label); }
.field--error .field-control { color: var(--input-error-border); }
.field--disabled .field-control { color: var(--input-disabled-text); cursor: not-allowed; }

.field-clear {
  display: flex;
  padding: 0;
  border: none;
  background: transparent;
  color: var(--input-icon-active);
  cursor: pointer;
}
.field--error .field-clear { color: var(--input-error-border); }
.field-check { display: flex; color: var(--input-success-border); }

.field-required { margin-top: 4px; font-size: 0.875rem; }
.field-required-asterisk { color: var(--input-required-asterisk); }
.field-required-text { color: var(--input-required-text); }
.dropdown-wrapper .field-required-asterisk { color: var(--dropdown-required-asterisk); }
.dropdown-wrapper .field-required-text { color: var(--dropdown-required-text); }
.field-required-text.is-disabled { color: var(--input-disabled-text); }

/* === Dropdown === */
.dropdown-control {
  cursor: pointer;
  outline: none;
}
.dropdown.field--disabled .dropdown-control { cursor: not-allowed; }

.dropdown-value,
.dropdown-placeholder {
  flex: 1;
  text-align: left;
}
.dropdown-placeholder { color: var(--dropdown-label); }
.dropdown.field--disabled .dropdown-value { color: var(--dropdown-disabled-text); }

.dropdown-chevron {
  display: flex;
  color: var(--dropdown-icon-active);
  transition: transform 200ms ease;
}
.dropdown-chevron.is-open { transform: rotate(180deg); }
.dropdown.field--disabled .dropdown-chevron { color: var(--dropdown-disabled-icon); }

.dropdown-menu {
  position: absolute;
  left: 0;
  right: 0;
  z-index: 20;
  margin-top: 4px;
  border-radius: 5px;
  background: var(--color-neutral-white);
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.12);
  overflow: hidden;
  max-height: 0;
  opacity: 0;
  pointer-events: none;
  transition: max-height 200ms ease, opacity 200ms ease;
}
.dropdown-menu.is-open {
  max-height: 320px;
  opacity: 1;
  pointer-events: auto;
}

.dropdown-item {
  padding: 12px 16px;
  cursor: pointer;
}
.dropdown-item.is-active { background: var(--dropdown-item-hover-bg); }
.dropdown-item.is-selected { font-weight: 600; }

/* === LoginMagicLink === */
.login-magic-link {
  position: relative;
  width: 100%;
  max-width: 28rem;
  padding: 24px;
  border-radius: 8px;
  background: var(--color-neutral-white);
}

.login-close {
  position: absolute;
  top: 8px;
  right: 16px;
  padding: 8px;
  border: none;
  border-radius: 4px;
  background: transparent;
  color: var(--color-neutral-black);
  cursor: pointer;
}
.login-close:focus-visible { outline: 2px solid var(--dropdown-border); }

.login-title {
  margin: 48px 32px 16px 0;
  font-size: 2.5rem;
  font-weight: 500;
  line-height: 1.2;
  color: var(--color-primary-default);
}

.login-subtitle { margin: 0 0 32px; }
.login-field { margin-bottom: 24px; }
.login-action { margin-bottom: 16px; }
.login-action--last { margin-bottom: 24px; }

/* === LoginDrawer === */
.drawer-backdrop {
  position: fixed;
  inset: 0;
  z-index: 9998;
  background: rgba(0, 0, 0, 0.6);
  opacity: 0;
  pointer-events: none;
  transition: opacity 300ms ease;
}
.drawer-backdrop.is-open {
  opacity: 1;
  pointer-events: auto;
}

.drawer-panel {
  position: fixed;
  top: 0;
  right: 0;
  z-index: 9999;
  width: 100%;
  max-width: 28rem;
  height: 100%;
  background: var(--color-neutral-white);
  transform: translateX(100%);
  transition: transform 300ms ease-in-out;
}
.drawer-panel.is-open {
  transform: translateX(0);
  box-shadow: -8px 0 32px rgba(0, 0, 0, 0.25);
}

.drawer-scroll {
  height: 100%;
  overflow-y: auto;
}
"#;

/// Brand token blocks followed by the component rules
pub fn stylesheet() -> String {
    format!("{}\n{}", Theme::stylesheet(), COMPONENT_STYLES)
}

/// Injects the full stylesheet; render once near the root
#[component]
pub fn BiglightStyles() -> Element {
    let css = use_hook(stylesheet);
    rsx! {
        style { {css} }
    }
}
