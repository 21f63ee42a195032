use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let paragraph = Paragraph::new(hint_line(mode)).style(hint_style());
    f.render_widget(paragraph, area);
}

fn hint_line(mode: UiMode) -> Line<'static> {
    match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("a add   "),
            Span::raw("d/Enter mark as done   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTodo | UiMode::SettingTimer => Line::from(vec![
            Span::raw(" Tab next field   "),
            Span::raw("Enter continue   "),
            Span::raw("Esc cancel"),
        ]),
    }
}
