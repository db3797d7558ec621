//! JSON file backed storage

use super::{FormLibrary, FormSummary, StorageError};
use crate::export::{json, Artifact, ExportError};
use crate::state::FormConfig;
use directories::ProjectDirs;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const LIBRARY_FILE: &str = "forms.json";

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn export_error(path: &Path, err: ExportError) -> StorageError {
    let path = path.to_path_buf();
    match err {
        ExportError::Parse(source) => StorageError::Parse { path, source },
        ExportError::Serialize(source) => StorageError::Serialize { path, source },
    }
}

/// Library stored as a JSON array of forms in one file
#[derive(Debug, Clone)]
pub struct JsonFileLibrary {
    path: PathBuf,
}

impl JsonFileLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/forms.json`, if a home directory can be resolved
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formsmith", "formsmith")
            .map(|dirs| dirs.data_dir().join(LIBRARY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<FormConfig>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(io_error(&self.path))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, forms: &[FormConfig]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let content =
            serde_json::to_string_pretty(forms).map_err(|source| StorageError::Serialize {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, content).map_err(io_error(&self.path))
    }
}

impl FormLibrary for JsonFileLibrary {
    fn list(&self) -> Result<Vec<FormSummary>, StorageError> {
        Ok(self.read_all()?.iter().map(FormSummary::from).collect())
    }

    fn save(&self, form: &FormConfig) -> Result<(), StorageError> {
        let mut forms = self.read_all()?;
        match forms.iter_mut().find(|f| f.id == form.id) {
            Some(existing) => *existing = form.clone(),
            None => forms.push(form.clone()),
        }
        self.write_all(&forms)?;
        tracing::info!(form_id = %form.id, path = %self.path.display(), "saved form to library");
        Ok(())
    }

    fn load(&self, id: &str) -> Result<FormConfig, StorageError> {
        self.read_all()?
            .into_iter()
            .find(|f| f.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }
}

/// Check the invariants a form must hold before it replaces the session's form
pub fn validate_form(form: &FormConfig) -> Result<(), StorageError> {
    if form.id.trim().is_empty() {
        return Err(StorageError::Invalid("form id is empty".to_string()));
    }
    let mut seen = HashSet::new();
    for element in &form.elements {
        if element.id.trim().is_empty() {
            return Err(StorageError::Invalid(format!(
                "a {} element has an empty id",
                element.kind.default_label()
            )));
        }
        if !seen.insert(element.id.as_str()) {
            return Err(StorageError::Invalid(format!(
                "duplicate element id {}",
                element.id
            )));
        }
        match (element.kind.has_options(), element.options.is_some()) {
            (true, false) => {
                return Err(StorageError::Invalid(format!(
                    "element {} has no options",
                    element.id
                )))
            }
            (false, true) => {
                return Err(StorageError::Invalid(format!(
                    "element {} cannot carry options",
                    element.id
                )))
            }
            _ => {}
        }
    }
    Ok(())
}

/// Read, parse and validate a structural export
pub fn import_form(path: &Path) -> Result<FormConfig, StorageError> {
    let content = fs::read_to_string(path).map_err(io_error(path))?;
    let form = json::from_json(&content).map_err(|err| export_error(path, err))?;
    validate_form(&form)?;
    tracing::info!(form_id = %form.id, path = %path.display(), "imported form");
    Ok(form)
}

/// Write an artifact under `dir`, returning the written path
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf, StorageError> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;
    let path = dir.join(&artifact.filename);
    fs::write(&path, &artifact.content).map_err(io_error(&path))?;
    tracing::info!(path = %path.display(), mime = artifact.mime, "wrote export");
    Ok(path)
}
