//! Trait abstraction for the form library to enable mocking in tests

use super::{FormSummary, StorageError};
use crate::state::FormConfig;

/// Saved-forms collection, keyed by form id
#[cfg_attr(test, mockall::automock)]
pub trait FormLibrary {
    /// All saved forms, in save order
    fn list(&self) -> Result<Vec<FormSummary>, StorageError>;

    /// Insert the form, or replace the saved form with the same id
    fn save(&self, form: &FormConfig) -> Result<(), StorageError>;

    /// Load a saved form by id
    fn load(&self, id: &str) -> Result<FormConfig, StorageError>;
}
