//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{
    render_error_dialog, render_export_dialog, render_import_dialog, render_library_dialog,
    render_notice_dialog,
};
