//! Structural JSON export

use super::ExportError;
use crate::state::FormConfig;

/// Pretty-printed JSON of the whole form
pub fn to_json(form: &FormConfig) -> Result<String, ExportError> {
    serde_json::to_string_pretty(form).map_err(ExportError::Serialize)
}

/// Parse a structural export back into a form
pub fn from_json(content: &str) -> Result<FormConfig, ExportError> {
    serde_json::from_str(content).map_err(ExportError::Parse)
}
