//! The raw row model of the report table.

use serde::Deserialize;

/// One `(Name, Value)` row of the report.
///
/// Empty or missing `Value` cells deserialize to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Value")]
    value: Option<String>,
}

impl ReportRow {
    #[cfg(test)]
    pub(crate) fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
