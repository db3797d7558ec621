//! UI module for rendering the builder

mod canvas;
mod components;
mod layout;
mod palette;
mod settings;
mod theme;
mod widgets;

use crate::app::App;
use crate::state::Dialog;
use components::{
    render_error_dialog, render_export_dialog, render_import_dialog, render_library_dialog,
};
use ratatui::Frame;
use widgets::render_scrollable_list;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, status) = layout::create_layout(frame.area());

    layout::draw_header(frame, header, app);

    if app.session.preview_mode {
        canvas::draw_preview(frame, body, app);
    } else {
        let (palette_area, canvas_area, settings_area) = layout::split_panes(body);
        palette::draw(frame, palette_area, app);
        canvas::draw(frame, canvas_area, app);
        settings::draw(frame, settings_area, app);
    }

    layout::draw_status_bar(frame, status, app);

    match &app.state.dialog {
        Some(Dialog::Export(export)) => render_export_dialog(frame, app, export),
        Some(Dialog::Library { forms, selected }) => render_library_dialog(frame, forms, *selected),
        Some(Dialog::Import { path }) => render_import_dialog(frame, path),
        None => {}
    }

    // Errors draw over everything else
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.state.error_count());
    }
}
