//! Button component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a centered, bordered button in `accent`; disabled buttons are dimmed
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, accent: Color, enabled: bool) {
    let color = if enabled { accent } else { Color::DarkGray };
    let mut text_style = Style::default().fg(color);
    if enabled {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let button = Paragraph::new(content.to_string())
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(button, area);
}
