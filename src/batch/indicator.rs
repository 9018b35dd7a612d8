//! Indicator metadata queries
//!
//! The canonical work item: an indicator value with an optional type.
//! Typed and untyped indicators cannot share a metadata request, so the
//! presence of a type is the grouping key.

use super::types::WorkItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One indicator to look up
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorQuery {
    /// Indicator value, e.g. an IP address or file hash
    pub value: String,

    /// Indicator type, e.g. `IP` or `SHA256`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub indicator_type: Option<String>,
}

impl IndicatorQuery {
    /// An untyped query
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            indicator_type: None,
        }
    }

    /// A typed query
    pub fn typed(value: impl Into<String>, indicator_type: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            indicator_type: Some(indicator_type.into()),
        }
    }

    /// Whether a type is set
    pub fn is_typed(&self) -> bool {
        self.indicator_type.is_some()
    }
}

impl WorkItem for IndicatorQuery {
    type Id = (String, Option<String>);
    type Group = bool;

    fn identity(&self) -> Self::Id {
        (self.value.clone(), self.indicator_type.clone())
    }

    fn group(&self) -> bool {
        self.is_typed()
    }
}

impl fmt::Display for IndicatorQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.indicator_type {
            Some(indicator_type) => write!(f, "{}:{}", indicator_type, self.value),
            None => f.write_str(&self.value),
        }
    }
}
