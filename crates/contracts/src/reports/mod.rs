//! Hand-authored datasets behind the dashboard, scorecard, and reports
//! views. These are editorial numbers, not aggregations of the project
//! and partner collections.

pub mod dashboard;
pub mod progress;
pub mod scorecard;

use serde::{Deserialize, Serialize};

/// A labelled value, the common currency of the chart views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

impl NamedValue {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}
