//! Select options for the Dropdown.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// One selectable entry: `value` is matched, `label` is displayed
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Ordered options with unique values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<SelectOption>,
}

impl OptionList {
    /// Build a list, rejecting duplicate values
    pub fn new(options: Vec<SelectOption>) -> UiResult<Self> {
        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.value.as_str()) {
                return Err(UiError::DuplicateOptionValue(option.value.clone()));
            }
        }
        Ok(Self { options })
    }

    /// Build a list keeping the first occurrence of each value.
    ///
    /// Components receive raw vectors from callers; duplicates are a caller
    /// bug, so they are logged and dropped rather than rendered twice.
    pub fn dedup(options: Vec<SelectOption>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(options.len());
        for option in options {
            if seen.insert(option.value.clone()) {
                kept.push(option);
            } else {
                tracing::warn!(value = %option.value, "dropping duplicate option value");
            }
        }
        Self { options: kept }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }

    /// The option selected by `value`, if any
    pub fn selected(&self, value: Option<&str>) -> Option<&SelectOption> {
        let value = value?;
        self.options.iter().find(|o| o.value == value)
    }

    /// Label shown for the bound value; empty when nothing matches
    pub fn display_label(&self, value: Option<&str>) -> &str {
        self.selected(value).map(|o| o.label.as_str()).unwrap_or("")
    }

    /// Whether `option` is the selected one (`aria-selected`)
    pub fn is_selected(option: &SelectOption, value: Option<&str>) -> bool {
        value == Some(option.value.as_str())
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

/// Customer types offered by the magic-link form
pub fn default_customer_types() -> Vec<SelectOption> {
    vec![
        SelectOption::new("retail", "Retail Store Owner"),
        SelectOption::new("convenience", "Convenience Shop"),
        SelectOption::new("hospitality", "Hospitality"),
        SelectOption::new("catering", "Catering & Events"),
        SelectOption::new("online", "Online/Delivery Only"),
    ]
}
