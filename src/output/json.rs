//! JSON and YAML output formatters
//!
//! Structured formats carry the full records as returned by the API, not
//! just the displayed columns.

use super::{Formatter, RecordView};
use crate::error::Result;

/// Pretty-printed JSON array
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, view: &RecordView<'_>) -> Result<String> {
        Ok(serde_json::to_string_pretty(view.records)?)
    }
}

/// YAML sequence
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format(&self, view: &RecordView<'_>) -> Result<String> {
        let yaml = serde_yml::to_string(view.records)?;
        Ok(yaml.trim_end().to_string())
    }
}
