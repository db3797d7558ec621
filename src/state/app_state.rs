//! Terminal front-end state
//!
//! Everything here is presentation only: which pane has focus, cursor
//! positions and open dialogs. Form data lives in [`super::SessionState`].

use super::element::{ElementKind, FormElement};
use crate::export::ExportFormat;
use crate::storage::FormSummary;

/// Pane that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Palette,
    Canvas,
    Settings,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::Palette => Self::Canvas,
            Self::Canvas => Self::Settings,
            Self::Settings => Self::Palette,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Palette => Self::Settings,
            Self::Canvas => Self::Palette,
            Self::Settings => Self::Canvas,
        }
    }
}

/// One editable row of the settings pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Title,
    Description,
    PrimaryColor,
    Label,
    Required,
    Placeholder,
    Option(usize),
    NewOption,
}

impl SettingsField {
    pub fn label(&self) -> String {
        match self {
            Self::Title => "Form Title".to_string(),
            Self::Description => "Description".to_string(),
            Self::PrimaryColor => "Primary Color".to_string(),
            Self::Label => "Label".to_string(),
            Self::Required => "Required field".to_string(),
            Self::Placeholder => "Placeholder".to_string(),
            Self::Option(index) => format!("Option {}", index + 1),
            Self::NewOption => "Add option".to_string(),
        }
    }

    /// Rows accepting free text
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Required)
    }
}

/// Rows shown for the current selection: form settings when nothing is
/// selected, otherwise the element's editable attributes
pub fn settings_fields(selected: Option<&FormElement>) -> Vec<SettingsField> {
    let Some(element) = selected else {
        return vec![
            SettingsField::Title,
            SettingsField::Description,
            SettingsField::PrimaryColor,
        ];
    };

    let mut fields = vec![SettingsField::Label];
    if element.kind.honors_required() {
        fields.push(SettingsField::Required);
    }
    if element.kind.has_editable_placeholder() {
        fields.push(SettingsField::Placeholder);
    }
    if element.kind.has_options() {
        fields.extend((0..element.options().len()).map(SettingsField::Option));
        fields.push(SettingsField::NewOption);
    }
    fields
}

/// Export dialog state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDialog {
    pub format: ExportFormat,
    pub scroll: u16,
}

impl ExportDialog {
    pub fn new() -> Self {
        Self {
            format: ExportFormat::Json,
            scroll: 0,
        }
    }

    pub fn toggle_format(&mut self) {
        self.format = match self.format {
            ExportFormat::Json => ExportFormat::Html,
            ExportFormat::Html => ExportFormat::Json,
        };
        self.scroll = 0;
    }
}

impl Default for ExportDialog {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal dialogs; at most one is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Export(ExportDialog),
    Library {
        forms: Vec<FormSummary>,
        selected: usize,
    },
    Import {
        path: String,
    },
}

/// Main front-end state
#[derive(Debug, Default)]
pub struct AppState {
    pub focus: Focus,
    pub palette_index: usize,
    pub settings_index: usize,
    /// Text typed into the "add option" row
    pub new_option: String,
    pub dialog: Option<Dialog>,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
    errors: Vec<String>,
}

impl AppState {
    pub fn palette_kind(&self) -> ElementKind {
        ElementKind::ALL[self.palette_index.min(ElementKind::ALL.len() - 1)]
    }

    pub fn palette_down(&mut self) {
        if self.palette_index + 1 < ElementKind::ALL.len() {
            self.palette_index += 1;
        }
    }

    pub fn palette_up(&mut self) {
        self.palette_index = self.palette_index.saturating_sub(1);
    }

    /// Keep the settings cursor inside the current row set
    pub fn clamp_settings(&mut self, row_count: usize) {
        if row_count == 0 {
            self.settings_index = 0;
        } else if self.settings_index >= row_count {
            self.settings_index = row_count - 1;
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "user-visible error");
        self.errors.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::factory::create_element;
    use pretty_assertions::assert_eq;

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_focus_cycles_both_ways() {
            assert_eq!(Focus::Palette.next(), Focus::Canvas);
            assert_eq!(Focus::Settings.next(), Focus::Palette);
            assert_eq!(Focus::Palette.prev(), Focus::Settings);
            assert_eq!(Focus::Canvas.prev().next(), Focus::Canvas);
        }
    }

    mod settings_rows {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_form_settings_without_selection() {
            assert_eq!(
                settings_fields(None),
                vec![
                    SettingsField::Title,
                    SettingsField::Description,
                    SettingsField::PrimaryColor
                ]
            );
        }

        #[test]
        fn test_text_element_rows() {
            let element = create_element(ElementKind::Text);
            assert_eq!(
                settings_fields(Some(&element)),
                vec![
                    SettingsField::Label,
                    SettingsField::Required,
                    SettingsField::Placeholder
                ]
            );
        }

        #[test]
        fn test_choice_element_lists_options_then_add_row() {
            let element = create_element(ElementKind::Radio);
            assert_eq!(
                settings_fields(Some(&element)),
                vec![
                    SettingsField::Label,
                    SettingsField::Required,
                    SettingsField::Option(0),
                    SettingsField::Option(1),
                    SettingsField::Option(2),
                    SettingsField::NewOption,
                ]
            );
        }

        #[test]
        fn test_submit_and_checkbox_only_edit_label() {
            for kind in [ElementKind::Submit, ElementKind::Checkbox] {
                let element = create_element(kind);
                assert_eq!(settings_fields(Some(&element)), vec![SettingsField::Label]);
            }
        }

        #[test]
        fn test_date_has_no_placeholder_row() {
            let element = create_element(ElementKind::Date);
            assert!(!settings_fields(Some(&element)).contains(&SettingsField::Placeholder));
        }

        #[test]
        fn test_clamp_settings() {
            let mut state = AppState {
                settings_index: 7,
                ..Default::default()
            };
            state.clamp_settings(3);
            assert_eq!(state.settings_index, 2);
            state.clamp_settings(0);
            assert_eq!(state.settings_index, 0);
        }
    }

    mod palette {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_palette_navigation_stops_at_edges() {
            let mut state = AppState::default();
            state.palette_up();
            assert_eq!(state.palette_kind(), ElementKind::Text);
            for _ in 0..20 {
                state.palette_down();
            }
            assert_eq!(state.palette_kind(), ElementKind::Submit);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_error_queue_is_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
            state.dismiss_error();
        }
    }

    #[test]
    fn test_export_dialog_toggle_resets_scroll() {
        let mut dialog = ExportDialog::new();
        dialog.scroll = 5;
        dialog.toggle_format();
        assert_eq!(dialog.format, ExportFormat::Html);
        assert_eq!(dialog.scroll, 0);
        dialog.toggle_format();
        assert_eq!(dialog.format, ExportFormat::Json);
    }
}
