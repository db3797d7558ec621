//! Export dialog: JSON/HTML tabs over the generated document

use super::base::{centered_rect, render_frame};
use crate::app::App;
use crate::export::ExportFormat;
use crate::state::ExportDialog;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn tab(format: ExportFormat, active: ExportFormat) -> Span<'static> {
    let label = format!(" {} ", format.label());
    if format == active {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::Gray))
    }
}

pub fn render_export_dialog(frame: &mut Frame, app: &App, dialog: &ExportDialog) {
    let screen = frame.area();
    let area = centered_rect(
        screen.width.saturating_mul(4) / 5,
        screen.height.saturating_mul(4) / 5,
        screen,
    );
    let inner = render_frame(frame, area, "Export Form", Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tabs + filename
            Constraint::Min(0),    // document
            Constraint::Length(1), // hint
        ])
        .split(inner);

    let (filename, content) = match app.export_artifact(dialog.format) {
        Ok(artifact) => (artifact.filename, artifact.content),
        Err(err) => (String::from("-"), format!("Export failed: {err}")),
    };

    let header = vec![
        Line::from(vec![
            tab(ExportFormat::Json, dialog.format),
            Span::raw(" "),
            tab(ExportFormat::Html, dialog.format),
        ]),
        Line::from(vec![
            Span::styled("File: ", Style::default().fg(Color::DarkGray)),
            Span::raw(filename),
            Span::styled(
                format!("  → {}", app.config.export_dir().display()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let document = Paragraph::new(content)
        .style(Style::default().fg(Color::White))
        .scroll((dialog.scroll, 0));
    frame.render_widget(document, chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Tab: switch format  j/k: scroll  c: copy  w: write file  Esc: close",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[2],
    );
}
