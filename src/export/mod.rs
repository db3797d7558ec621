//! Document generation
//!
//! A form can be exported as its structural JSON or as a standalone HTML page.
//! Generation is pure: the same form always yields byte-identical output.

pub mod html;
pub mod json;

use crate::state::FormConfig;
use thiserror::Error;

/// Fallback file stem when the title has no usable characters
pub const FALLBACK_FILE_STEM: &str = "form";

/// Export target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Html => "text/html",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Html => "HTML",
        }
    }
}

/// Errors raised while generating or parsing exports
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize form: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("invalid form document: {0}")]
    Parse(#[source] serde_json::Error),
}

/// A generated document ready to copy or write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub content: String,
    pub mime: &'static str,
}

/// Generate the export artifact for a form
pub fn generate(form: &FormConfig, format: ExportFormat) -> Result<Artifact, ExportError> {
    let content = match format {
        ExportFormat::Json => json::to_json(form)?,
        ExportFormat::Html => html::generate_html(form),
    };
    tracing::debug!(
        form_id = %form.id,
        format = format.label(),
        bytes = content.len(),
        "generated export"
    );
    Ok(Artifact {
        filename: export_filename(&form.title, format),
        content,
        mime: format.mime(),
    })
}

/// Derive a download name from the form title: whitespace runs become `-`,
/// the result is lowercased
pub fn export_filename(title: &str, format: ExportFormat) -> String {
    let stem = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    let stem = if stem.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        stem
    };
    format!("{stem}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{create_element, Command, ElementKind, ElementPatch, SessionState};
    use pretty_assertions::assert_eq;

    mod filenames {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_whitespace_runs_become_single_dash() {
            assert_eq!(
                export_filename("Contact  Us Form", ExportFormat::Html),
                "contact-us-form.html"
            );
        }

        #[test]
        fn test_mixed_whitespace_and_case() {
            assert_eq!(
                export_filename("Job\tApplication\n2024", ExportFormat::Json),
                "job-application-2024.json"
            );
        }

        #[test]
        fn test_surrounding_whitespace_is_dropped() {
            assert_eq!(
                export_filename("  Survey ", ExportFormat::Json),
                "survey.json"
            );
        }

        #[test]
        fn test_empty_title_falls_back() {
            assert_eq!(export_filename("", ExportFormat::Html), "form.html");
            assert_eq!(export_filename("   ", ExportFormat::Json), "form.json");
        }
    }

    mod artifacts {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_json_artifact() {
            let form = FormConfig::new();
            let artifact = generate(&form, ExportFormat::Json).unwrap();
            assert_eq!(artifact.filename, "untitled-form.json");
            assert_eq!(artifact.mime, "application/json");
            assert!(artifact.content.contains("\"title\": \"Untitled Form\""));
        }

        #[test]
        fn test_html_artifact() {
            let form = FormConfig::new();
            let artifact = generate(&form, ExportFormat::Html).unwrap();
            assert_eq!(artifact.filename, "untitled-form.html");
            assert_eq!(artifact.mime, "text/html");
            assert!(artifact.content.starts_with("<!DOCTYPE html>"));
        }

        #[test]
        fn test_generation_is_deterministic() {
            let mut session = SessionState::default();
            for kind in ElementKind::ALL {
                session.apply(Command::add(create_element(kind))).unwrap();
            }
            for format in [ExportFormat::Json, ExportFormat::Html] {
                let first = generate(&session.form, format).unwrap();
                let second = generate(&session.form, format).unwrap();
                assert_eq!(first, second);
            }
        }
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_labeled_required_input_reaches_document() {
            let mut session = SessionState::default();
            let element = create_element(ElementKind::Text);
            let id = element.id.clone();
            session.apply(Command::add(element)).unwrap();
            session
                .apply(Command::update(
                    id.clone(),
                    ElementPatch {
                        label: Some("Full Name".to_string()),
                        required: Some(true),
                        ..Default::default()
                    },
                ))
                .unwrap();

            let html = generate(&session.form, ExportFormat::Html)
                .unwrap()
                .content;
            assert!(html.contains(&format!(
                "<label class=\"form-label required\" for=\"{id}\">Full Name</label>"
            )));
            assert!(html.contains(&format!(
                "<input type=\"text\" id=\"{id}\" name=\"{id}\" class=\"form-input\" placeholder=\"Enter text input\" required />"
            )));
        }

        #[test]
        fn test_dropdown_option_removal_reaches_document() {
            let mut session = SessionState::default();
            let element = create_element(ElementKind::Select);
            let id = element.id.clone();
            let mut options = element.options().to_vec();
            session.apply(Command::add(element)).unwrap();
            options.remove(1);
            session
                .apply(Command::update(id, ElementPatch::options(options)))
                .unwrap();

            let html = generate(&session.form, ExportFormat::Html)
                .unwrap()
                .content;
            let rendered: Vec<&str> = html
                .lines()
                .map(str::trim)
                .filter(|l| l.starts_with("<option"))
                .collect();
            assert_eq!(
                rendered,
                vec![
                    "<option value=\"\">Select an option</option>",
                    "<option value=\"Option 1\">Option 1</option>",
                    "<option value=\"Option 3\">Option 3</option>",
                ]
            );
        }
    }
}
