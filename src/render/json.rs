//! JSON rendering for reports.

use crate::error::{Error, Result};
use crate::model::Section;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
pub fn to_json(section: &Section, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(section),
        JsonFormat::Compact => serde_json::to_string(section),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Build a report from its JSON description.
///
/// The description goes through the same validation as the builder API, so
/// duplicate keys or bad bullets are rejected here.
pub fn from_json(json: &str) -> Result<Section> {
    serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))
}
