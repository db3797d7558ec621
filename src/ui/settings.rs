//! Settings pane: form settings, or the selected element's attributes

use super::components::{render_button, BUTTON_HEIGHT};
use super::layout::pane_border;
use crate::app::App;
use crate::platform::{self, shortcut_label};
use crate::state::{Focus, SettingsField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the settings pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.focus == Focus::Settings;
    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pane_border(app, Focus::Settings)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BUTTON_HEIGHT), Constraint::Min(0)])
        .split(inner);

    let (button, accent) = if app.session.preview_mode {
        ("Exit Preview", Color::Yellow)
    } else {
        ("Preview", Color::Green)
    };
    let button = format!("{button}  {}", shortcut_label(platform::PREVIEW_KEY));
    render_button(frame, chunks[0], &button, accent, !app.session.form.elements.is_empty());

    let selected = app.session.selected_element();
    let heading = match selected {
        Some(element) => format!("{} Settings", element.kind.palette_label()),
        None => "Form Settings".to_string(),
    };
    let mut lines = vec![
        Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut cursor_line = 0;
    for (idx, field) in app.settings_fields().into_iter().enumerate() {
        let at_cursor = focused && idx == app.state.settings_index;
        if at_cursor {
            cursor_line = lines.len();
        }
        lines.extend(field_lines(app, field, at_cursor, selected.map(|e| e.required)));
    }

    if selected.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc returns to form settings",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let visible = usize::from(chunks[1].height);
    let scroll = u16::try_from((cursor_line + 3).saturating_sub(visible)).unwrap_or(0);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), chunks[1]);
}

fn field_lines(
    app: &App,
    field: SettingsField,
    at_cursor: bool,
    required: Option<bool>,
) -> Vec<Line<'static>> {
    let label_style = if at_cursor {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let value_style = if at_cursor {
        Style::default().fg(Color::White)
    } else {
        Style::default()
    };
    let caret = if at_cursor { "▏" } else { "" };
    let pointer = if at_cursor { "> " } else { "  " };

    match field {
        SettingsField::Required => {
            let mark = if required.unwrap_or(false) { "[x]" } else { "[ ]" };
            vec![Line::from(vec![
                Span::raw(pointer),
                Span::styled(format!("{mark} {}", field.label()), label_style),
            ])]
        }
        SettingsField::Option(_) => vec![Line::from(vec![
            Span::raw(pointer),
            Span::styled("• ", label_style),
            Span::styled(format!("{}{caret}", app.setting_value(field)), value_style),
        ])],
        SettingsField::NewOption => vec![Line::from(vec![
            Span::raw(pointer),
            Span::styled("+ ", label_style),
            Span::styled(
                format!("{}{caret}", app.setting_value(field)),
                value_style,
            ),
            Span::styled(
                if at_cursor { "  (Enter adds)" } else { "  add option" },
                Style::default().fg(Color::DarkGray),
            ),
        ])],
        _ => vec![
            Line::from(Span::styled(format!("  {}", field.label()), label_style)),
            Line::from(vec![
                Span::raw(pointer),
                Span::styled(format!("{}{caret}", app.setting_value(field)), value_style),
            ]),
        ],
    }
}
