//! Layout components (header, panes, status bar)

use crate::app::App;
use crate::platform::{self, shortcut_label};
use crate::state::{Dialog, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Palette pane width
const PALETTE_WIDTH: u16 = 26;
/// Settings pane width
const SETTINGS_WIDTH: u16 = 38;

/// Split the screen into header, body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Split the body into palette, canvas and settings panes
pub fn split_panes(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(PALETTE_WIDTH),
            Constraint::Min(0),
            Constraint::Length(SETTINGS_WIDTH),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Border color of a pane
pub fn pane_border(app: &App, pane: Focus) -> Color {
    if app.state.focus == pane && app.state.dialog.is_none() {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw the header line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.session.form;
    let mut spans = vec![
        Span::styled(
            " formsmith ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(&form.title, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {} elements  theme: {}", form.elements.len(), app.session.theme().label()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if app.session.preview_mode {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            " PREVIEW ",
            Style::default().fg(Color::Black).bg(Color::Green),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(drag) = &app.session.drag {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("carrying {} ", drag.kind.palette_label()),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = format!(" {}:quit ", shortcut_label(platform::QUIT_KEY));
    let width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current context
fn get_hints(app: &App) -> String {
    let global = format!(
        "{}:theme {}:preview {}:export {}:save {}:open {}:import {}:new",
        shortcut_label(platform::THEME_KEY),
        shortcut_label(platform::PREVIEW_KEY),
        shortcut_label(platform::EXPORT_KEY),
        shortcut_label(platform::SAVE_KEY),
        shortcut_label(platform::OPEN_KEY),
        shortcut_label(platform::IMPORT_KEY),
        shortcut_label(platform::NEW_FORM_KEY),
    );

    match &app.state.dialog {
        Some(Dialog::Export(_)) => {
            return "Tab:JSON/HTML  j/k:scroll  c:copy  w:write file  Esc:close".to_string()
        }
        Some(Dialog::Library { .. }) => return "j/k:nav  Enter:open  Esc:close".to_string(),
        Some(Dialog::Import { .. }) => return "type a path  Enter:import  Esc:cancel".to_string(),
        None => {}
    }

    if app.session.preview_mode {
        return "Tab/↓:next  ↑:prev  Space:toggle  Enter:submit  Esc:exit preview".to_string();
    }

    let local = match app.state.focus {
        Focus::Palette => "j/k:nav  Enter:add  Space:carry",
        Focus::Canvas if app.session.drag.is_some() => "j/k:target  Space:drop  Esc:cancel",
        Focus::Canvas => "j/k:select  J/K:move  Space:carry  d:delete  c:copy  Enter:edit",
        Focus::Settings => "↑/↓:field  type to edit  Space:required  Enter:add option  ^D:del option",
    };
    format!("Tab:pane  {local}  {global}")
}
