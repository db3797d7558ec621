//! Configuration handling for the builder

use crate::export::html::is_hex_color;
use crate::state::{FormConfig, FormStyles, Theme};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BuilderConfig {
    /// Theme of new forms
    pub default_theme: Option<Theme>,
    /// Primary color of new forms
    pub primary_color: Option<String>,
    /// Directory exports are written to (current directory if unset)
    pub export_dir: Option<PathBuf>,
    /// Library file (defaults to the data directory)
    pub library_path: Option<PathBuf>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "formsmith", "formsmith")
}

impl BuilderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: BuilderConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to file
    #[cfg(test)]
    fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Blank form seeded with the configured theme and color
    pub fn new_form(&self) -> FormConfig {
        let mut form = FormConfig::new();
        let theme = self.default_theme.unwrap_or_default();
        let primary = match self.primary_color.as_deref() {
            Some(color) if is_hex_color(color) => color.to_string(),
            Some(color) => {
                tracing::warn!(color, "ignoring invalid primary_color in config");
                form.styles.primary_color.clone()
            }
            None => form.styles.primary_color.clone(),
        };
        form.theme = theme;
        form.styles = FormStyles::for_theme(theme, primary);
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DEFAULT_PRIMARY_COLOR;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert!(config.default_theme.is_none());
        assert!(config.primary_color.is_none());
        assert!(config.export_dir.is_none());
        assert!(config.library_path.is_none());
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = BuilderConfig {
            default_theme: Some(Theme::Dark),
            primary_color: Some("#10B981".to_string()),
            export_dir: Some(PathBuf::from("/tmp/exports")),
            library_path: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"default_theme\":\"dark\""));
        let parsed: BuilderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: BuilderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, BuilderConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"default_theme": "light", "unknown_field": "value"}"#;
        let parsed: BuilderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.default_theme, Some(Theme::Light));
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("config.json");
        let config = BuilderConfig {
            primary_color: Some("#fff".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(BuilderConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{").unwrap();
        assert!(BuilderConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_new_form_uses_configured_theme_and_color() {
        let config = BuilderConfig {
            default_theme: Some(Theme::Dark),
            primary_color: Some("#10B981".to_string()),
            ..Default::default()
        };
        let form = config.new_form();
        assert_eq!(form.theme, Theme::Dark);
        assert_eq!(form.styles, FormStyles::for_theme(Theme::Dark, "#10B981"));
    }

    #[test]
    fn test_new_form_ignores_invalid_color() {
        let config = BuilderConfig {
            primary_color: Some("blue".to_string()),
            ..Default::default()
        };
        assert_eq!(config.new_form().styles.primary_color, DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_config_path_is_config_json_under_project_dirs() {
        // None only when no home directory can be resolved
        if let Some(path) = BuilderConfig::config_path() {
            assert!(path.ends_with("config.json"));
            assert!(path.to_string_lossy().contains("formsmith"));
        }
        if let Some(dir) = BuilderConfig::data_dir() {
            assert!(dir.to_string_lossy().contains("formsmith"));
        }
    }
}
