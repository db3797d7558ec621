//! Application state and core logic

use crate::config::BuilderConfig;
use crate::export::{self, Artifact, ExportError, ExportFormat};
use crate::platform;
use crate::state::{
    create_element, duplicate_element, reduce, settings_fields, AppState, Command, Dialog,
    DragPayload, DragSource, ElementKind, ElementPatch, ExportDialog, Focus, FormConfig,
    FormSettingsPatch, FormStyles, PreviewState, SessionState, SettingsField,
};
use crate::storage::{self, FormLibrary, FormSummary};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;

/// Main application struct
pub struct App {
    /// Form under edit plus selection, drag and preview flags
    pub session: SessionState,
    /// Values typed into the live preview
    pub preview: PreviewState,
    /// Front-end state (focus, cursors, dialogs)
    pub state: AppState,
    pub config: BuilderConfig,
    library: Box<dyn FormLibrary>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App with a blank form seeded from the config
    pub fn new(config: BuilderConfig, library: Box<dyn FormLibrary>) -> Self {
        let session = SessionState::new(config.new_form());
        tracing::info!(form_id = %session.form.id, "started new form");
        Self {
            session,
            preview: PreviewState::default(),
            state: AppState::default(),
            config,
            library,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Apply a command to the session; rejections are reported in the status bar
    pub fn dispatch(&mut self, command: Command) -> bool {
        match reduce(&self.session, command) {
            Ok(next) => {
                self.session = next;
                true
            }
            Err(err) => {
                self.state.status_message = Some(err.to_string());
                false
            }
        }
    }

    /// Rows of the settings pane for the current selection
    pub fn settings_fields(&self) -> Vec<SettingsField> {
        settings_fields(self.session.selected_element())
    }

    pub fn export_artifact(&self, format: ExportFormat) -> Result<Artifact, ExportError> {
        export::generate(&self.session.form, format)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.state.status_message = None;

        if platform::shortcut_char(&key) == Some(platform::QUIT_KEY) {
            self.quit = true;
            return Ok(());
        }

        if let Some(dialog) = self.state.dialog.take() {
            self.state.dialog = self.handle_dialog_key(dialog, key);
            return Ok(());
        }

        if let Some(c) = platform::shortcut_char(&key) {
            if self.handle_shortcut(c) {
                return Ok(());
            }
        }

        if self.session.preview_mode {
            self.handle_preview_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            _ => match self.state.focus {
                Focus::Palette => self.handle_palette_key(key),
                Focus::Canvas => self.handle_canvas_key(key),
                Focus::Settings => self.handle_settings_key(key),
            },
        }

        Ok(())
    }

    /// Global shortcuts; returns false for keys that are not bound
    fn handle_shortcut(&mut self, c: char) -> bool {
        match c {
            platform::THEME_KEY => {
                self.dispatch(Command::ToggleTheme);
            }
            platform::PREVIEW_KEY => self.toggle_preview(),
            platform::EXPORT_KEY => {
                self.state.dialog = Some(Dialog::Export(ExportDialog::new()));
            }
            platform::SAVE_KEY => self.save_to_library(),
            platform::OPEN_KEY => self.open_library(),
            platform::IMPORT_KEY => {
                self.state.dialog = Some(Dialog::Import {
                    path: String::new(),
                });
            }
            platform::NEW_FORM_KEY => {
                let form = self.config.new_form();
                self.load_form(form);
            }
            _ => return false,
        }
        true
    }

    fn toggle_preview(&mut self) {
        let entering = !self.session.preview_mode;
        if entering {
            self.preview.reset();
            self.dispatch(Command::SetDragPayload(None));
        }
        self.dispatch(Command::SetPreviewMode(entering));
    }

    /// Replace the session's form and reset front-end cursors
    fn load_form(&mut self, form: FormConfig) {
        let title = form.title.clone();
        self.dispatch(Command::LoadForm(form));
        self.preview.reset();
        self.state.settings_index = 0;
        self.state.new_option.clear();
        self.state.status_message = Some(format!("Loaded \"{title}\""));
    }

    fn save_to_library(&mut self) {
        match self.library.save(&self.session.form) {
            Ok(()) => {
                self.state.status_message = Some(format!("✓ Saved \"{}\"", self.session.form.title));
            }
            Err(err) => self.push_error(format!("Failed to save form: {err}")),
        }
    }

    fn open_library(&mut self) {
        match self.library.list() {
            Ok(forms) if forms.is_empty() => {
                self.state.status_message = Some("No saved forms yet".to_string());
            }
            Ok(forms) => self.state.dialog = Some(Dialog::Library { forms, selected: 0 }),
            Err(err) => self.push_error(format!("Failed to read library: {err}")),
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.palette_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.palette_up(),
            KeyCode::Enter => {
                let element = create_element(self.state.palette_kind());
                let id = element.id.clone();
                self.dispatch(Command::add(element));
                self.dispatch(Command::select(Some(id)));
            }
            KeyCode::Char(' ') => {
                let kind = self.state.palette_kind();
                self.dispatch(Command::SetDragPayload(Some(DragPayload::from_palette(kind))));
                self.state.focus = Focus::Canvas;
                self.state.status_message =
                    Some(format!("Carrying {}: Space to drop", kind.palette_label()));
            }
            _ => {}
        }
    }

    fn select_index(&mut self, index: usize) {
        if let Some(id) = self.session.form.elements.get(index).map(|e| e.id.clone()) {
            self.dispatch(Command::select(Some(id)));
        }
    }

    fn handle_canvas_key(&mut self, key: KeyEvent) {
        let len = self.session.form.elements.len();
        let selected = self.session.selected_index();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = selected.map_or(0, |i| (i + 1).min(len.saturating_sub(1)));
                self.select_index(next);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let prev = selected.map_or(0, |i| i.saturating_sub(1));
                self.select_index(prev);
            }
            KeyCode::Char('J') => {
                if let Some(i) = selected.filter(|i| i + 1 < len) {
                    self.dispatch(Command::ReorderElements { from: i, to: i + 1 });
                }
            }
            KeyCode::Char('K') => {
                if let Some(i) = selected.filter(|i| *i > 0) {
                    self.dispatch(Command::ReorderElements { from: i, to: i - 1 });
                }
            }
            KeyCode::Char(' ') => {
                if self.session.drag.is_some() {
                    self.drop_payload();
                } else if let Some(element) = self.session.selected_element() {
                    let payload = DragPayload::from_element(element);
                    self.state.status_message =
                        Some(format!("Moving \"{}\": j/k then Space", element.label));
                    self.dispatch(Command::SetDragPayload(Some(payload)));
                }
            }
            KeyCode::Esc => {
                if self.session.drag.is_some() {
                    self.dispatch(Command::SetDragPayload(None));
                } else {
                    self.dispatch(Command::select(None));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let (Some(i), Some(id)) = (selected, self.session.selected_element_id.clone()) {
                    self.dispatch(Command::delete(id));
                    let remaining = self.session.form.elements.len();
                    if remaining > 0 {
                        self.select_index(i.min(remaining - 1));
                    }
                }
            }
            KeyCode::Char('c') => {
                if let Some(copy) = self.session.selected_element().map(duplicate_element) {
                    let id = copy.id.clone();
                    self.dispatch(Command::add(copy));
                    self.dispatch(Command::select(Some(id)));
                }
            }
            KeyCode::Enter => {
                if selected.is_some() {
                    self.state.settings_index = 0;
                    self.state.focus = Focus::Settings;
                }
            }
            _ => {}
        }
    }

    /// Drop the carried element at the canvas cursor
    fn drop_payload(&mut self) {
        let Some(payload) = self.session.drag.clone() else {
            return;
        };
        let cursor = self.session.selected_index();

        match payload.source {
            DragSource::Palette => {
                let element = create_element(payload.kind);
                let id = element.id.clone();
                self.dispatch(Command::AddElement {
                    element,
                    index: cursor.map(|i| i + 1),
                });
                self.dispatch(Command::select(Some(id)));
            }
            DragSource::Existing { element_id } => {
                let len = self.session.form.elements.len();
                if let Some(from) = self.session.form.position_of(&element_id) {
                    let to = cursor.unwrap_or(len.saturating_sub(1));
                    if from != to {
                        self.dispatch(Command::ReorderElements { from, to });
                    }
                }
                self.dispatch(Command::select(Some(element_id)));
            }
        }
        self.dispatch(Command::SetDragPayload(None));
    }

    /// Current text of a settings row
    pub fn setting_value(&self, field: SettingsField) -> String {
        let form = &self.session.form;
        let element = self.session.selected_element();
        match field {
            SettingsField::Title => form.title.clone(),
            SettingsField::Description => form.description.clone().unwrap_or_default(),
            SettingsField::PrimaryColor => form.styles.primary_color.clone(),
            SettingsField::Label => element.map(|e| e.label.clone()).unwrap_or_default(),
            SettingsField::Placeholder => element
                .and_then(|e| e.placeholder.clone())
                .unwrap_or_default(),
            SettingsField::Option(i) => element
                .and_then(|e| e.options().get(i).cloned())
                .unwrap_or_default(),
            SettingsField::NewOption => self.state.new_option.clone(),
            SettingsField::Required => String::new(),
        }
    }

    fn commit_setting(&mut self, field: SettingsField, value: String) {
        let selected_id = self.session.selected_element_id.clone();
        let command = match (field, selected_id) {
            (SettingsField::Title, _) => Command::UpdateFormSettings(FormSettingsPatch::title(value)),
            (SettingsField::Description, _) => {
                Command::UpdateFormSettings(FormSettingsPatch::description(value))
            }
            (SettingsField::PrimaryColor, _) => {
                Command::UpdateFormSettings(FormSettingsPatch::styles(FormStyles {
                    primary_color: value,
                    ..self.session.form.styles.clone()
                }))
            }
            (SettingsField::NewOption, _) => {
                self.state.new_option = value;
                return;
            }
            (SettingsField::Label, Some(id)) => Command::update(id, ElementPatch::label(value)),
            (SettingsField::Placeholder, Some(id)) => {
                Command::update(id, ElementPatch::placeholder(value))
            }
            (SettingsField::Option(i), Some(id)) => {
                let mut options = self.current_options();
                match options.get_mut(i) {
                    Some(option) => *option = value,
                    None => return,
                }
                Command::update(id, ElementPatch::options(options))
            }
            _ => return,
        };
        self.dispatch(command);
    }

    fn edit_setting(&mut self, field: SettingsField, edit: impl FnOnce(&mut String)) {
        let mut value = self.setting_value(field);
        edit(&mut value);
        self.commit_setting(field, value);
    }

    fn current_options(&self) -> Vec<String> {
        self.session
            .selected_element()
            .map(|e| e.options().to_vec())
            .unwrap_or_default()
    }

    fn toggle_required(&mut self) {
        if let Some(element) = self.session.selected_element() {
            let command = Command::update(element.id.clone(), ElementPatch::required(!element.required));
            self.dispatch(command);
        }
    }

    fn add_option(&mut self) {
        let option = self.state.new_option.trim().to_string();
        let Some(id) = self.session.selected_element_id.clone() else {
            return;
        };
        if option.is_empty() {
            return;
        }
        let mut options = self.current_options();
        options.push(option);
        if self.dispatch(Command::update(id, ElementPatch::options(options))) {
            self.state.new_option.clear();
            // Stay on the "add option" row, which moved down by one
            self.state.settings_index += 1;
        }
    }

    fn delete_option(&mut self, index: usize) {
        let Some(id) = self.session.selected_element_id.clone() else {
            return;
        };
        let mut options = self.current_options();
        if index < options.len() {
            options.remove(index);
            self.dispatch(Command::update(id, ElementPatch::options(options)));
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        let fields = self.settings_fields();
        self.state.clamp_settings(fields.len());
        let Some(field) = fields.get(self.state.settings_index).copied() else {
            return;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Up => {
                self.state.settings_index = self.state.settings_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.state.settings_index + 1 < fields.len() {
                    self.state.settings_index += 1;
                }
            }
            KeyCode::Esc => {
                if self.session.selected_element_id.is_some() {
                    self.dispatch(Command::select(None));
                    self.state.settings_index = 0;
                }
                self.state.focus = Focus::Canvas;
            }
            KeyCode::Char('d') if ctrl => {
                if let SettingsField::Option(index) = field {
                    self.delete_option(index);
                    let rows = self.settings_fields().len();
                    self.state.clamp_settings(rows);
                }
            }
            KeyCode::Enter => match field {
                SettingsField::NewOption => self.add_option(),
                SettingsField::Required => self.toggle_required(),
                _ => {
                    if self.state.settings_index + 1 < fields.len() {
                        self.state.settings_index += 1;
                    }
                }
            },
            KeyCode::Char(' ') if field == SettingsField::Required => self.toggle_required(),
            KeyCode::Char(c) if !ctrl && field.is_text() => self.edit_setting(field, |s| s.push(c)),
            KeyCode::Backspace if field.is_text() => self.edit_setting(field, |s| {
                s.pop();
            }),
            _ => {}
        }
    }

    fn handle_preview_key(&mut self, key: KeyEvent) {
        // The acknowledgment notice is modal; the key that closes it does nothing else
        if self.preview.acknowledgment.take().is_some() {
            return;
        }
        let count = self.session.form.elements.len();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return self.toggle_preview(),
            KeyCode::Tab | KeyCode::Down => return self.preview.next(count),
            KeyCode::BackTab | KeyCode::Up => return self.preview.prev(count),
            _ => {}
        }

        let Some(element) = self.session.form.elements.get(self.preview.active_index) else {
            return;
        };
        let option_count = element.options().len();

        match (element.kind, key.code) {
            (ElementKind::Submit, KeyCode::Enter | KeyCode::Char(' ')) => {
                let message = self.preview.submit();
                tracing::info!(acknowledgment = message, "preview form submitted");
            }
            (ElementKind::Textarea, KeyCode::Enter) => {
                self.preview.field_mut(element).push_char('\n');
            }
            (
                ElementKind::Checkbox | ElementKind::Radio | ElementKind::Select,
                KeyCode::Char(' ') | KeyCode::Enter,
            ) => self.preview.field_mut(element).toggle(option_count),
            (_, KeyCode::Char(c)) if !ctrl => self.preview.field_mut(element).push_char(c),
            (_, KeyCode::Backspace) => self.preview.field_mut(element).pop_char(),
            (_, KeyCode::Delete) => self.preview.field_mut(element).clear(),
            _ => {}
        }
    }

    /// Handle a key in the open dialog, returning the dialog to keep open
    fn handle_dialog_key(&mut self, dialog: Dialog, key: KeyEvent) -> Option<Dialog> {
        match dialog {
            Dialog::Export(export) => self.handle_export_key(export, key),
            Dialog::Library { forms, selected } => self.handle_library_key(forms, selected, key),
            Dialog::Import { path } => self.handle_import_key(path, key),
        }
    }

    fn handle_export_key(&mut self, mut dialog: ExportDialog, key: KeyEvent) -> Option<Dialog> {
        match key.code {
            KeyCode::Esc => return None,
            KeyCode::Tab | KeyCode::BackTab => dialog.toggle_format(),
            KeyCode::Char('j') | KeyCode::Down => dialog.scroll = dialog.scroll.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => dialog.scroll = dialog.scroll.saturating_sub(1),
            KeyCode::Char('c') => match self.export_artifact(dialog.format) {
                Ok(artifact) => match self.copy_to_clipboard(&artifact.content) {
                    Ok(()) => {
                        self.state.status_message =
                            Some(format!("Copied {} to clipboard", dialog.format.label()));
                    }
                    Err(err) => self.push_error(format!("Failed to copy: {err}")),
                },
                Err(err) => self.push_error(format!("Failed to export: {err}")),
            },
            KeyCode::Char('w') => {
                if let Err(err) = self.write_export(dialog.format) {
                    self.push_error(format!("Failed to write export: {err}"));
                }
            }
            _ => {}
        }
        Some(Dialog::Export(dialog))
    }

    fn write_export(&mut self, format: ExportFormat) -> Result<()> {
        let artifact = self.export_artifact(format)?;
        let path = storage::write_artifact(&self.config.export_dir(), &artifact)?;
        self.state.status_message = Some(format!("Wrote {}", path.display()));
        Ok(())
    }

    fn handle_library_key(
        &mut self,
        forms: Vec<FormSummary>,
        mut selected: usize,
        key: KeyEvent,
    ) -> Option<Dialog> {
        match key.code {
            KeyCode::Esc => return None,
            KeyCode::Char('j') | KeyCode::Down => {
                if selected + 1 < forms.len() {
                    selected += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => selected = selected.saturating_sub(1),
            KeyCode::Enter => {
                if let Some(summary) = forms.get(selected) {
                    let loaded = self
                        .library
                        .load(&summary.id)
                        .and_then(|form| storage::validate_form(&form).map(|()| form));
                    match loaded {
                        Ok(form) => self.load_form(form),
                        Err(err) => self.push_error(format!("Failed to open form: {err}")),
                    }
                }
                return None;
            }
            _ => {}
        }
        Some(Dialog::Library { forms, selected })
    }

    fn handle_import_key(&mut self, mut path: String, key: KeyEvent) -> Option<Dialog> {
        match key.code {
            KeyCode::Esc => return None,
            KeyCode::Enter => match storage::import_form(Path::new(path.trim())) {
                Ok(form) => {
                    self.load_form(form);
                    return None;
                }
                Err(err) => self.push_error(format!("Invalid form file: {err}")),
            },
            KeyCode::Backspace => {
                path.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => path.push(c),
            _ => {}
        }
        Some(Dialog::Import { path })
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Theme, SUBMIT_ACKNOWLEDGMENT};
    use crate::storage::{MockFormLibrary, StorageError};
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(key(*code)).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with(library: MockFormLibrary) -> App {
        App::new(BuilderConfig::default(), Box::new(library))
    }

    fn app() -> App {
        app_with(MockFormLibrary::new())
    }

    fn kinds(app: &App) -> Vec<ElementKind> {
        app.session.form.elements.iter().map(|e| e.kind).collect()
    }

    /// Add palette entry `index` (0 = text input) by pressing Enter
    fn add_from_palette(app: &mut App, index: usize) {
        app.state.focus = Focus::Palette;
        app.state.palette_index = index;
        press(app, &[KeyCode::Enter]);
    }

    mod palette {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enter_appends_and_selects() {
            let mut app = app();
            add_from_palette(&mut app, 0);
            add_from_palette(&mut app, 2);
            assert_eq!(kinds(&app), vec![ElementKind::Text, ElementKind::Email]);
            assert_eq!(app.session.selected_index(), Some(1));
        }

        #[test]
        fn test_space_picks_up_and_canvas_drop_inserts_after_cursor() {
            let mut app = app();
            add_from_palette(&mut app, 0);
            add_from_palette(&mut app, 2);
            press(&mut app, &[KeyCode::Tab]);
            press(&mut app, &[KeyCode::Char('k')]);
            assert_eq!(app.session.selected_index(), Some(0));

            app.state.focus = Focus::Palette;
            app.state.palette_index = 10;
            press(&mut app, &[KeyCode::Char(' ')]);
            assert_eq!(app.state.focus, Focus::Canvas);
            assert_eq!(
                app.session.drag,
                Some(DragPayload::from_palette(ElementKind::Submit))
            );

            press(&mut app, &[KeyCode::Char(' ')]);
            assert_eq!(
                kinds(&app),
                vec![ElementKind::Text, ElementKind::Submit, ElementKind::Email]
            );
            assert!(app.session.drag.is_none());
            assert_eq!(app.session.selected_index(), Some(1));
        }
    }

    mod canvas {
        use super::*;
        use pretty_assertions::assert_eq;

        fn three_elements() -> App {
            let mut app = app();
            add_from_palette(&mut app, 0);
            add_from_palette(&mut app, 1);
            add_from_palette(&mut app, 2);
            app.state.focus = Focus::Canvas;
            app
        }

        #[test]
        fn test_shift_k_moves_selected_up() {
            let mut app = three_elements();
            press(&mut app, &[KeyCode::Char('K')]);
            assert_eq!(
                kinds(&app),
                vec![ElementKind::Text, ElementKind::Email, ElementKind::Textarea]
            );
            assert_eq!(app.session.selected_index(), Some(1));
            press(&mut app, &[KeyCode::Char('K'), KeyCode::Char('K')]);
            assert_eq!(app.session.selected_index(), Some(0));
        }

        #[test]
        fn test_pick_up_move_and_drop_reorders() {
            let mut app = three_elements();
            press(&mut app, &[KeyCode::Char('k'), KeyCode::Char('k')]);
            let first = app.session.form.elements[0].id.clone();
            press(&mut app, &[KeyCode::Char(' ')]);
            assert!(app.session.drag.is_some());
            press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('j')]);
            press(&mut app, &[KeyCode::Char(' ')]);
            assert_eq!(
                kinds(&app),
                vec![ElementKind::Textarea, ElementKind::Email, ElementKind::Text]
            );
            assert_eq!(app.session.selected_element_id.as_deref(), Some(first.as_str()));
            assert!(app.session.drag.is_none());
        }

        #[test]
        fn test_escape_cancels_drag_then_clears_selection() {
            let mut app = three_elements();
            press(&mut app, &[KeyCode::Char(' ')]);
            press(&mut app, &[KeyCode::Esc]);
            assert!(app.session.drag.is_none());
            assert!(app.session.selected_element_id.is_some());
            press(&mut app, &[KeyCode::Esc]);
            assert!(app.session.selected_element_id.is_none());
        }

        #[test]
        fn test_delete_selects_neighbor() {
            let mut app = three_elements();
            press(&mut app, &[KeyCode::Char('k'), KeyCode::Char('d')]);
            assert_eq!(kinds(&app), vec![ElementKind::Text, ElementKind::Email]);
            assert_eq!(app.session.selected_index(), Some(1));
        }

        #[test]
        fn test_duplicate_appends_copy() {
            let mut app = three_elements();
            press(&mut app, &[KeyCode::Char('k'), KeyCode::Char('k'), KeyCode::Char('c')]);
            assert_eq!(app.session.form.elements.len(), 4);
            assert_eq!(app.session.form.elements[3].label, "Text Input (Copy)");
            assert_eq!(app.session.selected_index(), Some(3));
        }

        #[test]
        fn test_enter_focuses_settings() {
            let mut app = three_elements();
            press(&mut app, &[KeyCode::Enter]);
            assert_eq!(app.state.focus, Focus::Settings);
        }
    }

    mod settings {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_edits_form_title_live() {
            let mut app = app();
            app.state.focus = Focus::Settings;
            for _ in 0.."Untitled Form".len() {
                press(&mut app, &[KeyCode::Backspace]);
            }
            type_text(&mut app, "Contact Us");
            assert_eq!(app.session.form.title, "Contact Us");
        }

        #[test]
        fn test_label_and_required() {
            let mut app = app();
            add_from_palette(&mut app, 0);
            app.state.focus = Focus::Settings;
            type_text(&mut app, "!");
            assert_eq!(app.session.form.elements[0].label, "Text Input!");

            press(&mut app, &[KeyCode::Down, KeyCode::Char(' ')]);
            assert!(app.session.form.elements[0].required);
        }

        #[test]
        fn test_add_and_delete_options() {
            let mut app = app();
            add_from_palette(&mut app, 8);
            app.state.focus = Focus::Settings;
            // Label, Required, Option 1..3, Add option
            app.state.settings_index = 5;
            type_text(&mut app, "Option 4");
            press(&mut app, &[KeyCode::Enter]);
            assert_eq!(app.session.form.elements[0].options().len(), 4);
            assert_eq!(app.state.settings_index, 6);
            assert!(app.state.new_option.is_empty());

            app.state.settings_index = 3;
            app.handle_key(ctrl('d')).unwrap();
            assert_eq!(
                app.session.form.elements[0].options(),
                &["Option 1", "Option 3", "Option 4"]
            );
        }

        #[test]
        fn test_blank_option_is_not_added() {
            let mut app = app();
            add_from_palette(&mut app, 7);
            app.state.focus = Focus::Settings;
            app.state.settings_index = 5;
            type_text(&mut app, "  ");
            press(&mut app, &[KeyCode::Enter]);
            assert_eq!(app.session.form.elements[0].options().len(), 3);
        }

        #[test]
        fn test_escape_deselects_and_returns_to_canvas() {
            let mut app = app();
            add_from_palette(&mut app, 0);
            app.state.focus = Focus::Settings;
            press(&mut app, &[KeyCode::Esc]);
            assert!(app.session.selected_element_id.is_none());
            assert_eq!(app.state.focus, Focus::Canvas);
        }
    }

    mod shortcuts {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_theme_toggle() {
            let mut app = app();
            app.handle_key(ctrl('t')).unwrap();
            assert_eq!(app.session.theme(), Theme::Dark);
            assert_eq!(app.session.form.styles.background_color, "#1F2937");
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = app();
            assert!(!app.should_quit());
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_new_form_replaces_session_form() {
            let mut app = app();
            add_from_palette(&mut app, 0);
            let old_id = app.session.form.id.clone();
            app.handle_key(ctrl('n')).unwrap();
            assert!(app.session.form.elements.is_empty());
            assert_ne!(app.session.form.id, old_id);
        }
    }

    mod preview {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_shows_acknowledgment_without_touching_form() {
            let mut app = app();
            add_from_palette(&mut app, 0);
            add_from_palette(&mut app, 10);
            let before = app.session.form.clone();

            app.handle_key(ctrl('p')).unwrap();
            assert!(app.session.preview_mode);
            type_text(&mut app, "Ada");
            press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);
            assert_eq!(app.preview.acknowledgment.as_deref(), Some(SUBMIT_ACKNOWLEDGMENT));

            let first = &app.session.form.elements[0].id;
            assert_eq!(app.preview.field(first).unwrap().text(), "Ada");
            assert_eq!(app.session.form, before);

            press(&mut app, &[KeyCode::Enter]);
            assert!(app.preview.acknowledgment.is_none());
            assert!(app.session.preview_mode);

            press(&mut app, &[KeyCode::Esc]);
            assert!(!app.session.preview_mode);
        }

        #[test]
        fn test_entering_preview_resets_values() {
            let mut app = app();
            add_from_palette(&mut app, 0);
            app.handle_key(ctrl('p')).unwrap();
            type_text(&mut app, "x");
            app.handle_key(ctrl('p')).unwrap();
            app.handle_key(ctrl('p')).unwrap();
            let id = &app.session.form.elements[0].id;
            assert!(app.preview.field(id).is_none());
        }
    }

    mod library {
        use super::*;
        use pretty_assertions::assert_eq;
        use chrono::Utc;

        #[test]
        fn test_save_writes_current_form() {
            let mut library = MockFormLibrary::new();
            library.expect_save().times(1).returning(|_| Ok(()));
            let mut app = app_with(library);
            app.handle_key(ctrl('s')).unwrap();
            assert!(!app.state.has_errors());
            assert!(app.state.status_message.unwrap().contains("Saved"));
        }

        #[test]
        fn test_save_failure_is_queued_and_dismissed() {
            let mut library = MockFormLibrary::new();
            library
                .expect_save()
                .returning(|_| Err(StorageError::Invalid("disk full".to_string())));
            let mut app = app_with(library);
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.state.current_error().unwrap().contains("disk full"));

            // Modal: other keys are swallowed
            app.handle_key(ctrl('t')).unwrap();
            assert_eq!(app.session.theme(), Theme::Light);
            press(&mut app, &[KeyCode::Enter]);
            assert!(!app.state.has_errors());
        }

        #[test]
        fn test_open_and_load_from_library() {
            let mut saved = FormConfig::new();
            saved.title = "Saved".to_string();
            saved.elements.push(create_element(ElementKind::Radio));
            let summary = FormSummary::from(&saved);
            let saved_id = saved.id.clone();

            let mut library = MockFormLibrary::new();
            library
                .expect_list()
                .returning(move || Ok(vec![summary.clone()]));
            library
                .expect_load()
                .withf(move |id| *id == saved_id)
                .returning(move |_| Ok(saved.clone()));

            let mut app = app_with(library);
            app.handle_key(ctrl('o')).unwrap();
            assert!(matches!(app.state.dialog, Some(Dialog::Library { .. })));
            press(&mut app, &[KeyCode::Enter]);
            assert!(app.state.dialog.is_none());
            assert_eq!(app.session.form.title, "Saved");
            assert!(app.session.selected_element_id.is_none());
        }

        #[test]
        fn test_empty_library_shows_status() {
            let mut library = MockFormLibrary::new();
            library.expect_list().returning(|| Ok(Vec::new()));
            let mut app = app_with(library);
            app.handle_key(ctrl('o')).unwrap();
            assert!(app.state.dialog.is_none());
            assert_eq!(app.state.status_message.as_deref(), Some("No saved forms yet"));
        }

        #[test]
        fn test_invalid_library_entry_is_rejected() {
            let mut broken = FormConfig::new();
            let mut select = create_element(ElementKind::Select);
            select.options = None;
            broken.elements.push(select);
            let summary = FormSummary {
                id: broken.id.clone(),
                title: broken.title.clone(),
                element_count: 1,
                updated_at: Utc::now(),
            };

            let mut library = MockFormLibrary::new();
            library
                .expect_list()
                .returning(move || Ok(vec![summary.clone()]));
            library.expect_load().returning(move |_| Ok(broken.clone()));

            let mut app = app_with(library);
            let before = app.session.form.id.clone();
            app.handle_key(ctrl('o')).unwrap();
            press(&mut app, &[KeyCode::Enter]);
            assert!(app.state.has_errors());
            assert_eq!(app.session.form.id, before);
        }
    }

    mod dialogs {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_import_from_path() {
            let dir = tempfile::tempdir().unwrap();
            let mut form = FormConfig::new();
            form.title = "Imported".to_string();
            let path = dir.path().join("imported.json");
            std::fs::write(&path, export::json::to_json(&form).unwrap()).unwrap();

            let mut app = app();
            app.handle_key(ctrl('l')).unwrap();
            type_text(&mut app, &path.display().to_string());
            press(&mut app, &[KeyCode::Enter]);
            assert!(app.state.dialog.is_none());
            assert_eq!(app.session.form, form);
        }

        #[test]
        fn test_import_bad_path_keeps_dialog_open() {
            let mut app = app();
            app.handle_key(ctrl('l')).unwrap();
            type_text(&mut app, "/definitely/not/here.json");
            press(&mut app, &[KeyCode::Enter]);
            assert!(app.state.has_errors());
            press(&mut app, &[KeyCode::Esc]);
            assert!(matches!(app.state.dialog, Some(Dialog::Import { .. })));
        }

        #[test]
        fn test_export_dialog_writes_file() {
            let dir = tempfile::tempdir().unwrap();
            let config = BuilderConfig {
                export_dir: Some(dir.path().to_path_buf()),
                ..Default::default()
            };
            let mut app = App::new(config, Box::new(MockFormLibrary::new()));
            app.handle_key(ctrl('e')).unwrap();
            press(&mut app, &[KeyCode::Tab, KeyCode::Char('w')]);
            assert!(!app.state.has_errors());
            assert!(dir.path().join("untitled-form.html").exists());

            press(&mut app, &[KeyCode::Esc]);
            assert!(app.state.dialog.is_none());
        }

        #[test]
        fn test_quit_works_inside_dialog() {
            let mut app = app();
            app.handle_key(ctrl('e')).unwrap();
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }
    }
}
