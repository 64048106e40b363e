//! Filter declarations and host-selected filter values
//!
//! Filters and their values are read-only, constructed fresh per
//! filter-resolution call; the selection is whatever the host passes back
//! in for the current invocation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filter input kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Select,
}

/// One filter the pipeline asks the host to present
#[derive(Debug, Clone, Serialize)]
pub struct Filter {
    pub name: String,
    pub title: String,
    pub required: bool,
    pub kind: FilterKind,
}

/// One selectable option for a filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValue {
    pub text: String,
    pub value: String,
}

/// Host-provided selection of filter values, keyed by filter name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSelection(HashMap<String, String>);

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Selected value for a filter; blank selections count as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
