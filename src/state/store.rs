//! Form store: the closed command set and its transitions
//!
//! All transitions run synchronously and to completion. A rejected command
//! leaves the session exactly as it was.

use super::element::{ElementPatch, FormElement};
use super::form::{FormConfig, FormSettingsPatch, FormStyles};
use super::session::{DragPayload, SessionState};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Commands accepted by the store
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert at `index` (clamped) or append
    AddElement {
        element: FormElement,
        index: Option<usize>,
    },
    UpdateElement {
        id: String,
        patch: ElementPatch,
    },
    DeleteElement {
        id: String,
    },
    /// Remove at `from`, then insert at `to` in the shortened sequence
    ReorderElements {
        from: usize,
        to: usize,
    },
    SelectElement {
        id: Option<String>,
    },
    SetDragPayload(Option<DragPayload>),
    ToggleTheme,
    SetPreviewMode(bool),
    LoadForm(FormConfig),
    UpdateFormSettings(FormSettingsPatch),
}

impl Command {
    pub fn add(element: FormElement) -> Self {
        Command::AddElement {
            element,
            index: None,
        }
    }

    pub fn update(id: impl Into<String>, patch: ElementPatch) -> Self {
        Command::UpdateElement {
            id: id.into(),
            patch,
        }
    }

    pub fn delete(id: impl Into<String>) -> Self {
        Command::DeleteElement { id: id.into() }
    }

    pub fn select(id: Option<String>) -> Self {
        Command::SelectElement { id }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddElement { .. } => "add_element",
            Command::UpdateElement { .. } => "update_element",
            Command::DeleteElement { .. } => "delete_element",
            Command::ReorderElements { .. } => "reorder_elements",
            Command::SelectElement { .. } => "select_element",
            Command::SetDragPayload(_) => "set_drag_payload",
            Command::ToggleTheme => "toggle_theme",
            Command::SetPreviewMode(_) => "set_preview_mode",
            Command::LoadForm(_) => "load_form",
            Command::UpdateFormSettings(_) => "update_form_settings",
        }
    }
}

/// Precondition violations reported by the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("reorder index out of range: from {from} to {to} with {len} elements")]
    IndexOutOfRange { from: usize, to: usize, len: usize },
}

impl SessionState {
    /// Apply a command using the current clock
    pub fn apply(&mut self, command: Command) -> Result<(), StoreError> {
        self.apply_at(command, Utc::now())
    }

    /// Apply a command, stamping mutations with `now`
    pub fn apply_at(&mut self, command: Command, now: DateTime<Utc>) -> Result<(), StoreError> {
        let name = command.name();
        let result = self.transition(command, now);
        match &result {
            Ok(()) => tracing::debug!(command = name, "applied"),
            Err(err) => tracing::warn!(command = name, "rejected: {err}"),
        }
        result
    }

    fn transition(&mut self, command: Command, now: DateTime<Utc>) -> Result<(), StoreError> {
        match command {
            Command::AddElement { element, index } => {
                let elements = &mut self.form.elements;
                match index {
                    Some(index) => elements.insert(index.min(elements.len()), element),
                    None => elements.push(element),
                }
                self.form.touch(now);
            }

            Command::UpdateElement { id, patch } => {
                if let Some(element) = self.form.elements.iter_mut().find(|e| e.id == id) {
                    element.apply_patch(patch);
                    self.form.touch(now);
                }
            }

            Command::DeleteElement { id } => {
                self.form.elements.retain(|e| e.id != id);
                if self.selected_element_id.as_deref() == Some(id.as_str()) {
                    self.selected_element_id = None;
                }
                self.form.touch(now);
            }

            Command::ReorderElements { from, to } => {
                let len = self.form.elements.len();
                if from >= len || to >= len {
                    return Err(StoreError::IndexOutOfRange { from, to, len });
                }
                let moved = self.form.elements.remove(from);
                self.form.elements.insert(to, moved);
                self.form.touch(now);
            }

            Command::SelectElement { id } => self.selected_element_id = id,

            Command::SetDragPayload(payload) => self.drag = payload,

            Command::ToggleTheme => {
                let theme = self.form.theme.toggle();
                let primary = std::mem::take(&mut self.form.styles.primary_color);
                self.form.theme = theme;
                self.form.styles = FormStyles::for_theme(theme, primary);
            }

            Command::SetPreviewMode(enabled) => self.preview_mode = enabled,

            Command::LoadForm(form) => {
                tracing::info!(form_id = %form.id, elements = form.elements.len(), "loading form");
                self.form = form;
                self.selected_element_id = None;
                self.drag = None;
            }

            Command::UpdateFormSettings(patch) => {
                self.form.apply_settings(patch);
                self.form.touch(now);
            }
        }
        Ok(())
    }
}

/// Pure transition: the next session state, or the rejection with `state` untouched
pub fn reduce(state: &SessionState, command: Command) -> Result<SessionState, StoreError> {
    let mut next = state.clone();
    next.apply(command)?;
    Ok(next)
}
