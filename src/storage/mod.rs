//! Form persistence
//!
//! The builder itself never persists anything; saving to the library,
//! importing a structural export and writing artifacts all live here behind
//! [`FormLibrary`] so the app can be tested with a mock.

mod file;
mod traits;

pub use file::{import_form, validate_form, write_artifact, JsonFileLibrary};
#[cfg(test)]
pub use traits::MockFormLibrary;
pub use traits::FormLibrary;

use crate::state::FormConfig;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid form file: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode forms for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid form: {0}")]
    Invalid(String),
    #[error("form not found: {0}")]
    NotFound(String),
}

/// Library listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSummary {
    pub id: String,
    pub title: String,
    pub element_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl From<&FormConfig> for FormSummary {
    fn from(form: &FormConfig) -> Self {
        Self {
            id: form.id.clone(),
            title: form.title.clone(),
            element_count: form.elements.len(),
            updated_at: form.updated_at,
        }
    }
}
