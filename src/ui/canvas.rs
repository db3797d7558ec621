//! Builder canvas and live preview
//!
//! Both go through [`describe`], the canvas in inert mode and the preview in
//! interactive mode, so they always show what the exported page will contain.

use super::components::render_notice_dialog;
use super::layout::pane_border;
use super::theme::FormColors;
use crate::app::App;
use crate::render::{describe, Control, ElementView, LabelPlacement, RenderMode};
use crate::state::{DragSource, Focus, FormConfig, PreviewField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Widest the form body is drawn in preview
const PREVIEW_MAX_WIDTH: u16 = 72;

fn label_line(view: &ElementView, colors: &FormColors) -> Line<'static> {
    let mut spans = vec![Span::styled(
        view.label.clone(),
        Style::default()
            .fg(colors.text)
            .add_modifier(Modifier::BOLD),
    )];
    if view.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}

/// Terminal rendering of one element view, with preview values if any
fn element_lines(
    view: &ElementView,
    value: Option<&PreviewField>,
    colors: &FormColors,
) -> Vec<Line<'static>> {
    let text = Style::default().fg(if view.interactive {
        colors.text
    } else {
        colors.muted
    });
    let hint = Style::default().fg(colors.muted);
    let frame_style = Style::default().fg(colors.muted);
    let typed = value.map(|v| v.text()).unwrap_or("");

    let mut lines = Vec::new();
    if view.label_placement == LabelPlacement::Block {
        lines.push(label_line(view, colors));
    }

    match &view.control {
        Control::Input {
            input_type,
            placeholder,
        } => {
            let shown = if !typed.is_empty() {
                let shown = if *input_type == "password" {
                    "•".repeat(typed.chars().count())
                } else {
                    typed.to_string()
                };
                Span::styled(shown, text)
            } else {
                let empty = match *input_type {
                    "file" => "Choose file…".to_string(),
                    "date" => "yyyy-mm-dd".to_string(),
                    _ => placeholder.clone().unwrap_or_default(),
                };
                Span::styled(empty, hint)
            };
            lines.push(Line::from(vec![
                Span::styled("[ ", frame_style),
                shown,
                Span::styled(" ]", frame_style),
            ]));
        }
        Control::TextArea { rows, placeholder } => {
            let mut body: Vec<Span> = if typed.is_empty() {
                vec![Span::styled(placeholder.clone().unwrap_or_default(), hint)]
            } else {
                typed
                    .split('\n')
                    .map(|l| Span::styled(l.to_string(), text))
                    .collect()
            };
            while body.len() < usize::from(*rows) {
                body.push(Span::raw(""));
            }
            for span in body {
                lines.push(Line::from(vec![Span::styled("│ ", frame_style), span]));
            }
        }
        Control::Checkbox => {
            let mark = if value.is_some_and(|v| v.is_checked()) {
                "[x] "
            } else {
                "[ ] "
            };
            lines.push(Line::from(vec![
                Span::styled(mark, frame_style),
                Span::styled(view.label.clone(), text),
            ]));
        }
        Control::RadioGroup { options, .. } => {
            let choice = value.and_then(|v| v.choice());
            for (index, option) in options.iter().enumerate() {
                let mark = if choice == Some(index) { "(•) " } else { "( ) " };
                lines.push(Line::from(vec![
                    Span::styled(mark, frame_style),
                    Span::styled(option.clone(), text),
                ]));
            }
        }
        Control::Select { prompt, options } => {
            let chosen = value
                .and_then(|v| v.choice())
                .and_then(|i| options.get(i))
                .map(|o| Span::styled(o.clone(), text))
                .unwrap_or_else(|| Span::styled(prompt.to_string(), hint));
            lines.push(Line::from(vec![
                Span::styled("[ ", frame_style),
                chosen,
                Span::styled(" ▾ ]", frame_style),
            ]));
            if !view.interactive {
                lines.push(Line::from(Span::styled(
                    format!("  {}", options.join(" · ")),
                    hint,
                )));
            }
        }
        Control::SubmitButton => {
            let style = if view.interactive {
                Style::default()
                    .fg(Color::White)
                    .bg(colors.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.primary)
            };
            lines.push(Line::from(Span::styled(format!(" {} ", view.label), style)));
        }
    }
    lines
}

fn prefixed(marker: Span<'static>, line: Line<'static>) -> Line<'static> {
    Line::from(
        std::iter::once(marker)
            .chain(line.spans)
            .collect::<Vec<_>>(),
    )
}

fn heading_lines(form: &FormConfig, colors: &FormColors) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        form.title.clone(),
        Style::default()
            .fg(colors.primary)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(description) = form.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(colors.muted),
        )));
    }
    lines.push(Line::from(""));
    lines
}

/// Scroll offset that keeps `target` line (and a few below it) visible
fn scroll_for(target: usize, visible: u16) -> u16 {
    let visible = usize::from(visible);
    let wanted = target + 4;
    u16::try_from(wanted.saturating_sub(visible)).unwrap_or(u16::MAX)
}

/// Draw the builder canvas
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.session.form;
    let colors = FormColors::for_form(form);
    let block = Block::default()
        .title(" Canvas ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pane_border(app, Focus::Canvas)))
        .style(Style::default().bg(colors.background).fg(colors.text));

    let mut lines = heading_lines(form, &colors);

    if form.elements.is_empty() {
        let message = if app.session.drag.is_some() {
            "Press Space to drop the element here"
        } else {
            "Add elements from the palette: Enter adds, Space carries one here"
        };
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(colors.muted),
        )));
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
        return;
    }

    let selected = app.session.selected_index();
    let carried_id = match app.session.drag.as_ref().map(|d| &d.source) {
        Some(DragSource::Existing { element_id }) => Some(element_id.as_str()),
        _ => None,
    };
    let mut selected_start = 0;

    for (idx, element) in form.elements.iter().enumerate() {
        let view = describe(element, RenderMode::Inert);
        let is_selected = selected == Some(idx);
        let is_carried = carried_id == Some(element.id.as_str());
        if is_selected {
            selected_start = lines.len();
        }

        let marker = if is_carried {
            Span::styled("┃ ", Style::default().fg(Color::Yellow))
        } else if is_selected {
            Span::styled("▌ ", Style::default().fg(colors.primary))
        } else {
            Span::raw("  ")
        };
        lines.push(prefixed(
            marker.clone(),
            Line::from(Span::styled(
                element.kind.palette_label(),
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::ITALIC),
            )),
        ));
        for line in element_lines(&view, None, &colors) {
            lines.push(prefixed(marker.clone(), line));
        }

        if is_selected {
            if let Some(drag) = &app.session.drag {
                let text = if drag.is_new() {
                    format!("── drop {} below ──", drag.kind.palette_label())
                } else if is_carried {
                    "── carrying ──".to_string()
                } else {
                    "── move here ──".to_string()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let scroll = scroll_for(selected_start, area.height.saturating_sub(2));
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

/// Draw the live preview in place of the three panes
pub fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.session.form;
    let colors = FormColors::for_form(form);
    let width = area.width.min(PREVIEW_MAX_WIDTH);
    let body = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().bg(colors.background).fg(colors.text));

    let mut lines = heading_lines(form, &colors);
    let mut active_start = 0;
    for (idx, element) in form.elements.iter().enumerate() {
        let view = describe(element, RenderMode::Interactive);
        let active = idx == app.preview.active_index;
        if active {
            active_start = lines.len();
        }
        let marker = if active {
            Span::styled("▶ ", Style::default().fg(colors.primary))
        } else {
            Span::raw("  ")
        };
        for line in element_lines(&view, app.preview.field(&element.id), &colors) {
            lines.push(prefixed(marker.clone(), line));
        }
        lines.push(Line::from(""));
    }

    let scroll = scroll_for(active_start, body.height.saturating_sub(2));
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), body);

    if let Some(message) = &app.preview.acknowledgment {
        render_notice_dialog(frame, message);
    }
}
