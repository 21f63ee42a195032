use crate::app::{AppState, DraftFormState, TimerFormState};
use crate::domain::{DraftField, RemainingTime, TimerField, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render whichever add form is open
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let (title, lines) = match (app.ui_mode, &app.draft_form, &app.timer_form) {
        (UiMode::AddingTodo, Some(form), _) => (" Add To-Do ", draft_form_lines(form)),
        (UiMode::SettingTimer, _, Some(form)) => (" Add Timer ", timer_form_lines(form)),
        _ => return,
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

fn draft_form_lines(form: &DraftFormState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw("")];

    for (field, value) in [
        (DraftField::Title, &form.title),
        (DraftField::Description, &form.description),
    ] {
        lines.extend(field_lines(field.label(), value, form.editing_field == field));
    }

    lines.push(Line::raw("Tab to switch fields  ·  Enter for timer  ·  Esc to cancel"));
    lines
}

fn timer_form_lines(form: &TimerFormState) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw("")];

    for &field in TimerField::all() {
        lines.extend(field_lines(field.label(), form.field(field), form.editing_field == field));
    }

    lines.push(Line::from(vec![
        Span::raw("Countdown: "),
        Span::styled(
            RemainingTime::from_millis(form.duration().to_millis()).to_string(),
            modal_title_style(),
        ),
    ]));
    lines.push(Line::raw("Tab to switch fields  ·  Enter to create  ·  Esc to cancel"));
    lines
}

/// Label line, value line with cursor, blank spacer
fn field_lines(label: &str, value: &str, editing: bool) -> Vec<Line<'static>> {
    let label = if editing {
        format!("{}: (editing)", label)
    } else {
        format!("{}:", label)
    };

    let value_line = Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);

    vec![Line::raw(label), value_line, Line::raw("")]
}
