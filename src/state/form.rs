//! Form aggregate model

use super::element::FormElement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Untitled Form";
pub const DEFAULT_PRIMARY_COLOR: &str = "#3B82F6";

/// Editor/export theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Fixed (background, text) pair applied to the form palette
    pub fn palette_colors(&self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("#FFFFFF", "#1F2937"),
            Self::Dark => ("#1F2937", "#F9FAFB"),
        }
    }
}

/// Form-wide style palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStyles {
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
}

impl FormStyles {
    pub fn for_theme(theme: Theme, primary_color: impl Into<String>) -> Self {
        let (background, text) = theme.palette_colors();
        Self {
            primary_color: primary_color.into(),
            background_color: background.to_string(),
            text_color: text.to_string(),
        }
    }
}

impl Default for FormStyles {
    fn default() -> Self {
        Self::for_theme(Theme::Light, DEFAULT_PRIMARY_COLOR)
    }
}

/// The form under edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub elements: Vec<FormElement>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub styles: FormStyles,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FormConfig {
    /// Create an empty form stamped with the given time
    pub fn new_at(now: DateTime<Utc>) -> Self {
        Self {
            id: format!("form-{}", uuid::Uuid::new_v4()),
            title: DEFAULT_TITLE.to_string(),
            description: None,
            elements: Vec::new(),
            theme: Theme::Light,
            styles: FormStyles::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn new() -> Self {
        Self::new_at(Utc::now())
    }

    pub fn find_element(&self, id: &str) -> Option<&FormElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Refresh the updated timestamp without ever moving it backwards
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    pub fn apply_settings(&mut self, patch: FormSettingsPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = if description.is_empty() {
                None
            } else {
                Some(description)
            };
        }
        if let Some(styles) = patch.styles {
            self.styles = styles;
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial form attributes for the settings command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSettingsPatch {
    pub title: Option<String>,
    /// An empty string clears the description
    pub description: Option<String>,
    pub styles: Option<FormStyles>,
}

impl FormSettingsPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn styles(styles: FormStyles) -> Self {
        Self {
            styles: Some(styles),
            ..Default::default()
        }
    }
}
