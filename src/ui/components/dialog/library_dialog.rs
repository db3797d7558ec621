//! Saved-forms library dialog

use super::base::{centered_rect, render_frame};
use crate::storage::FormSummary;
use crate::ui::render_scrollable_list;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

const LIBRARY_WIDTH: u16 = 60;

pub fn render_library_dialog(frame: &mut Frame, forms: &[FormSummary], selected: usize) {
    let rows = u16::try_from(forms.len()).unwrap_or(u16::MAX);
    let area = centered_rect(
        LIBRARY_WIDTH,
        rows.saturating_mul(2).saturating_add(2).max(4),
        frame.area(),
    );
    let inner = render_frame(frame, area, "Open Form", Color::Cyan);

    let items: Vec<ListItem> = forms
        .iter()
        .enumerate()
        .map(|(idx, form)| {
            let title_style = if idx == selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(vec![
                Line::from(Span::styled(form.title.clone(), title_style)),
                Line::from(Span::styled(
                    format!(
                        "  {} elements · updated {}",
                        form.element_count,
                        form.updated_at.format("%Y-%m-%d %H:%M")
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).highlight_symbol("▶ ");
    render_scrollable_list(frame, inner, list, selected);
}
