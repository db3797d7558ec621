//! Element palette pane

use super::layout::pane_border;
use super::render_scrollable_list;
use crate::app::App;
use crate::state::{ElementKind, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw the palette of element kinds
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.focus == Focus::Palette;
    let items: Vec<ListItem> = ElementKind::ALL
        .iter()
        .enumerate()
        .map(|(idx, kind)| {
            let selected = focused && idx == app.state.palette_index;
            let name_style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(kind.palette_label(), name_style)),
                Line::from(Span::styled(
                    format!("  {}", kind.description()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Elements ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(pane_border(app, Focus::Palette))),
        )
        .highlight_symbol(if focused { "▶ " } else { "  " });

    render_scrollable_list(frame, area, list, app.state.palette_index);
}
