//! Editor session state (ephemeral, never persisted)

use super::element::{ElementKind, FormElement};
use super::form::{FormConfig, Theme};

/// Where an in-flight drag originates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragSource {
    /// A new element picked from the palette
    Palette,
    /// An existing element being re-ordered
    Existing { element_id: String },
}

/// In-flight drag descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub kind: ElementKind,
    pub source: DragSource,
}

impl DragPayload {
    pub fn from_palette(kind: ElementKind) -> Self {
        Self {
            kind,
            source: DragSource::Palette,
        }
    }

    pub fn from_element(element: &FormElement) -> Self {
        Self {
            kind: element.kind,
            source: DragSource::Existing {
                element_id: element.id.clone(),
            },
        }
    }

    /// True when dropping creates a new element
    pub fn is_new(&self) -> bool {
        matches!(self.source, DragSource::Palette)
    }
}

/// Single source of truth for the builder
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub form: FormConfig,
    pub selected_element_id: Option<String>,
    pub preview_mode: bool,
    pub drag: Option<DragPayload>,
}

impl SessionState {
    pub fn new(form: FormConfig) -> Self {
        Self {
            form,
            selected_element_id: None,
            preview_mode: false,
            drag: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.form.theme
    }

    /// The selected element, if the selection points at one that exists
    pub fn selected_element(&self) -> Option<&FormElement> {
        self.selected_element_id
            .as_deref()
            .and_then(|id| self.form.find_element(id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_element_id
            .as_deref()
            .and_then(|id| self.form.position_of(id))
    }
}
