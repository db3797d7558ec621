//! Dialog components

mod base;
mod error_dialog;
mod export_dialog;
mod import_dialog;
mod library_dialog;

pub use error_dialog::{render_error_dialog, render_notice_dialog};
pub use export_dialog::render_export_dialog;
pub use import_dialog::render_import_dialog;
pub use library_dialog::render_library_dialog;
