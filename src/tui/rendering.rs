use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::layout::PickerLayout;

/// Render the entire picker UI
pub fn render_ui(
    frame: &mut Frame,
    labels: &[&String],
    selected_idx: usize,
    query: &str,
    total_count: usize,
) {
    let layout = PickerLayout::new(frame.area());

    render_project_list(frame, layout.list_area, labels, selected_idx);
    render_status_bar(frame, layout.status_area, query, labels.len(), total_count);
}

fn render_project_list(frame: &mut Frame, area: Rect, labels: &[&String], selected_idx: usize) {
    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let style = if idx == selected_idx {
                Style::default()
                    .fg(Color::Rgb(250, 250, 250)) // Bright text
                    .bg(Color::Rgb(16, 185, 129)) // Emerald background
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Rgb(113, 113, 122)) // Muted text
            };

            ListItem::new(label.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Projects "),
    );

    frame.render_widget(list, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    matched_count: usize,
    total_count: usize,
) {
    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Rgb(16, 185, 129))),
        Span::raw(query),
        Span::styled(
            format!("  ({matched_count}/{total_count})"),
            Style::default().fg(Color::Rgb(113, 113, 122)),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
