use crate::app::AppState;
use crate::domain::{countdown_glyph, due_at, format_clock, TodoItem, DUE_BANNER, EMPTY_LIST};
use crate::ui::styles::{
    banner_style, border_style, countdown_style, default_style, description_style, due_style,
    empty_style, selected_style, title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the to-do list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");
    let title = format!(" To-Do Lists ({}) ", date);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.store.is_empty() {
        let paragraph = Paragraph::new(vec![Line::raw(""), Line::styled(EMPTY_LIST, empty_style())])
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let now = Local::now();
    let items: Vec<ListItem> = app
        .store
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let lines = create_todo_lines(item, app.use_emoji, now);
            let style = if idx == app.selected_index {
                selected_style()
            } else {
                default_style()
            };

            ListItem::new(lines).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Render the "due" banner
pub fn render_due_banner(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(DUE_BANNER))
        .alignment(Alignment::Center)
        .style(banner_style())
        .block(Block::default().borders(Borders::ALL).style(banner_style()));

    f.render_widget(paragraph, area);
}

/// Create the lines for one to-do
/// Format:
///   [⏳] Write proposal
///        draft for friday
///        ⏱ 0:4:59  • due 12:45:03
fn create_todo_lines(item: &TodoItem, use_emoji: bool, now: DateTime<Local>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let glyph = countdown_glyph(item, use_emoji);
    lines.push(Line::from(vec![
        Span::raw(format!("[{}] ", glyph)),
        Span::raw(item.title().to_string()),
    ]));

    if !item.description().is_empty() {
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(item.description().to_string(), description_style()),
        ]));
    }

    let (clock, clock_style) = if item.is_expired() {
        ("⏰", due_style())
    } else {
        ("⏱", countdown_style())
    };
    let mut time_spans = vec![
        Span::raw("     "),
        Span::styled(format!("{} {}", clock, item.format_remaining()), clock_style),
    ];
    match due_at(item, now) {
        Some(due) => time_spans.push(Span::styled(
            format!("  • due {}", format_clock(due)),
            description_style(),
        )),
        None => time_spans.push(Span::styled("  • due", due_style())),
    }
    lines.push(Line::from(time_spans));

    lines
}
