use crate::domain::{
    clamp_selection, DraftField, DurationFields, NewTodo, TimerField, TodoDraft, TodoId, TodoItem,
    TodoStore, UiMode,
};
use crate::ticker::{tick_duration, Ticker};
use anyhow::Result;
use std::time::{Duration, Instant};

/// "Add To-Do" form state (title and description)
#[derive(Debug, Clone)]
pub struct DraftFormState {
    pub title: String,
    pub description: String,
    pub editing_field: DraftField,
}

impl DraftFormState {
    fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            editing_field: DraftField::Title,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.editing_field {
            DraftField::Title => &mut self.title,
            DraftField::Description => &mut self.description,
        }
    }
}

/// "Add Timer" form state; carries the draft from the previous screen
#[derive(Debug, Clone)]
pub struct TimerFormState {
    pub draft: TodoDraft,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub editing_field: TimerField,
}

impl TimerFormState {
    fn new(draft: TodoDraft) -> Self {
        Self {
            draft,
            hours: String::new(),
            minutes: String::new(),
            seconds: String::new(),
            editing_field: TimerField::Hours,
        }
    }

    pub fn field(&self, field: TimerField) -> &str {
        match field {
            TimerField::Hours => &self.hours,
            TimerField::Minutes => &self.minutes,
            TimerField::Seconds => &self.seconds,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.editing_field {
            TimerField::Hours => &mut self.hours,
            TimerField::Minutes => &mut self.minutes,
            TimerField::Seconds => &mut self.seconds,
        }
    }

    pub fn duration(&self) -> DurationFields {
        DurationFields::parse(&self.hours, &self.minutes, &self.seconds)
    }
}

/// Main application state
pub struct AppState {
    pub store: TodoStore,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub draft_form: Option<DraftFormState>,
    pub timer_form: Option<TimerFormState>,
    pub ticker: Ticker,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(use_emoji: bool) -> Self {
        Self::with_ticker(Ticker::new(tick_duration()), use_emoji)
    }

    pub fn with_ticker(ticker: Ticker, use_emoji: bool) -> Self {
        Self {
            store: TodoStore::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            draft_form: None,
            timer_form: None,
            ticker,
            use_emoji,
        }
    }

    /// Get the currently selected item
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.store.get(self.selected_index)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Mark the selected item as done, removing it from the list
    pub fn mark_done(&mut self) -> Result<()> {
        let Some(id) = self.selected_item().map(TodoItem::id) else {
            return Ok(());
        };

        self.store.remove_by_id(id)?;
        self.selected_index = clamp_selection(self.selected_index, self.store.len());
        Ok(())
    }

    /// Add a to-do directly (for testing and programmatic use)
    pub fn add_todo(&mut self, new: NewTodo) -> TodoId {
        self.store.add(new)
    }

    /// Open the "Add To-Do" form
    pub fn start_add_todo(&mut self) {
        self.draft_form = Some(DraftFormState::new());
        self.timer_form = None;
        self.ui_mode = UiMode::AddingTodo;
    }

    /// Move to the next field of whichever form is open
    pub fn input_form_toggle_field(&mut self) {
        match self.ui_mode {
            UiMode::AddingTodo => {
                if let Some(form) = &mut self.draft_form {
                    form.editing_field = form.editing_field.next();
                }
            }
            UiMode::SettingTimer => {
                if let Some(form) = &mut self.timer_form {
                    form.editing_field = form.editing_field.next();
                }
            }
            UiMode::Normal => {}
        }
    }

    /// Add character to the current field
    pub fn input_form_add_char(&mut self, c: char) {
        match self.ui_mode {
            UiMode::AddingTodo => {
                if let Some(form) = &mut self.draft_form {
                    form.field_mut().push(c);
                }
            }
            UiMode::SettingTimer => {
                if let Some(form) = &mut self.timer_form {
                    form.field_mut().push(c);
                }
            }
            UiMode::Normal => {}
        }
    }

    /// Backspace in the current field
    pub fn input_form_backspace(&mut self) {
        match self.ui_mode {
            UiMode::AddingTodo => {
                if let Some(form) = &mut self.draft_form {
                    form.field_mut().pop();
                }
            }
            UiMode::SettingTimer => {
                if let Some(form) = &mut self.timer_form {
                    form.field_mut().pop();
                }
            }
            UiMode::Normal => {}
        }
    }

    /// Submit whichever form is open
    pub fn submit_input_form(&mut self) {
        match self.ui_mode {
            UiMode::AddingTodo => self.submit_draft_form(),
            UiMode::SettingTimer => self.submit_timer_form(),
            UiMode::Normal => {}
        }
    }

    /// Keep the title and description and continue to the timer form
    fn submit_draft_form(&mut self) {
        if let Some(form) = self.draft_form.take() {
            let mut draft = TodoDraft::new();
            draft.set_title(form.title).set_description(form.description);
            self.timer_form = Some(TimerFormState::new(draft));
            self.ui_mode = UiMode::SettingTimer;
        }
    }

    /// Create the to-do from the draft and the entered duration
    fn submit_timer_form(&mut self) {
        if let Some(form) = self.timer_form.take() {
            let duration = form.duration();
            let new = form.draft.with_duration(duration);
            self.store.add(new);
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel input form, discarding the draft
    pub fn cancel_input_form(&mut self) {
        self.draft_form = None;
        self.timer_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Run one store tick for every period the ticker reports as elapsed
    pub fn tick(&mut self, now: Instant) {
        for _ in 0..self.ticker.due_ticks(now) {
            self.store.tick();
        }
    }

    /// How long the event loop may block before the next tick
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker.poll_timeout(now)
    }

    /// Whether the "due" banner should show
    pub fn has_due_item(&self) -> bool {
        self.store.has_due_item()
    }

    /// Stop the countdown timer; no ticks are applied afterwards
    pub fn shutdown(&mut self) {
        self.ticker.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn new_todo(title: &str, duration_ms: u64) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            description: String::new(),
            duration_ms,
        }
    }

    fn create_test_app() -> (AppState, Instant) {
        let start = Instant::now();
        let mut app = AppState::with_ticker(Ticker::starting_at(tick_duration(), start), true);
        app.add_todo(new_todo("Task 1", 60_000));
        app.add_todo(new_todo("Task 2", 120_000));
        (app, start)
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            app.input_form_add_char(c);
        }
    }

    #[test]
    fn test_app_state_new() {
        let (app, _) = create_test_app();
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.draft_form.is_none());
        assert!(app.timer_form.is_none());
    }

    #[test]
    fn test_move_selection() {
        let (mut app, _) = create_test_app();

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Can't go past the end
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        // Can't go below 0
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_mark_done_removes_selected() {
        let (mut app, _) = create_test_app();
        app.move_selection_down();
        app.mark_done().unwrap();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.items()[0].title(), "Task 1");
        // Selection clamped to the remaining row
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_mark_done_with_duplicate_titles() {
        let mut app = AppState::new(true);
        app.add_todo(new_todo("same", 1_000));
        app.add_todo(new_todo("same", 9_000));
        app.move_selection_down();

        app.mark_done().unwrap();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.items()[0].remaining_ms(), 1_000);
    }

    #[test]
    fn test_mark_done_on_empty_list() {
        let mut app = AppState::new(true);
        app.mark_done().unwrap();
        assert!(app.store.is_empty());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_add_flow() {
        let (mut app, _) = create_test_app();

        app.start_add_todo();
        assert_eq!(app.ui_mode, UiMode::AddingTodo);
        type_text(&mut app, "Read");
        app.input_form_toggle_field();
        type_text(&mut app, "Chapter 3x");
        app.input_form_backspace();

        app.submit_input_form();
        assert_eq!(app.ui_mode, UiMode::SettingTimer);
        assert!(app.draft_form.is_none());

        type_text(&mut app, "1");
        app.input_form_toggle_field();
        type_text(&mut app, "abc");
        app.input_form_toggle_field();
        type_text(&mut app, "5");
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.timer_form.is_none());
        assert_eq!(app.store.len(), 3);

        let item = &app.store.items()[2];
        assert_eq!(item.title(), "Read");
        assert_eq!(item.description(), "Chapter 3");
        // Unparsable minutes default to 0
        assert_eq!(item.remaining_ms(), 3_605_000);
    }

    #[test]
    fn test_cancel_add_flow() {
        let (mut app, _) = create_test_app();
        app.start_add_todo();
        type_text(&mut app, "Discard me");
        app.submit_input_form();
        app.cancel_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.timer_form.is_none());
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn test_tick_follows_ticker() {
        let (mut app, start) = create_test_app();

        app.tick(start + Duration::from_millis(500));
        assert_eq!(app.store.items()[0].remaining_ms(), 60_000);

        app.tick(start + Duration::from_millis(3_000));
        assert_eq!(app.store.items()[0].remaining_ms(), 57_000);
        assert_eq!(app.store.items()[1].remaining_ms(), 117_000);
    }

    #[test]
    fn test_due_banner_after_five_seconds() {
        let start = Instant::now();
        let mut app = AppState::with_ticker(Ticker::starting_at(tick_duration(), start), true);
        app.start_add_todo();
        type_text(&mut app, "Tea");
        app.submit_input_form();
        app.input_form_toggle_field();
        app.input_form_toggle_field();
        type_text(&mut app, "5");
        app.submit_input_form();

        for second in 1..=4 {
            app.tick(start + Duration::from_secs(second));
            assert!(!app.has_due_item());
        }
        app.tick(start + Duration::from_secs(5));

        assert!(app.has_due_item());
        assert!(app.store.items()[0].is_expired());
    }

    #[test]
    fn test_shutdown_stops_ticking() {
        let (mut app, start) = create_test_app();
        app.shutdown();
        app.tick(start + Duration::from_secs(10));
        assert_eq!(app.store.items()[0].remaining_ms(), 60_000);
    }
}
