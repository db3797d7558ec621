//! Import dialog: path to a form JSON file

use super::base::{centered_rect, render_frame};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_import_dialog(frame: &mut Frame, path: &str) {
    let area = centered_rect(64, 6, frame.area());
    let inner = render_frame(frame, area, "Import Form", Color::Cyan);

    let content = vec![
        Line::from(Span::styled(
            "Path to a form JSON file:",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(path.to_string()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: import  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(content), inner);
}
