//! Error and notice dialogs

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render the oldest queued error; `count` is the queue length
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, count: usize) {
    let title = if count > 1 {
        format!("Error (1 of {count})")
    } else {
        "Error".to_string()
    };
    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(dismiss_hint()),
            max_width: 60,
        },
    );
}

/// Render an informational notice, such as the preview submit acknowledgment
pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Notice",
            title_color: Color::Green,
            border_color: Color::Green,
            message,
            hint: Some(dismiss_hint()),
            max_width: 50,
        },
    );
}
