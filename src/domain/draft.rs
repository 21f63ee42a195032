use super::item::NewTodo;

/// Hour, minute and second values from the timer form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DurationFields {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationFields {
    /// Build from raw form text, each field falling back to 0
    pub fn parse(hours: &str, minutes: &str, seconds: &str) -> Self {
        Self {
            hours: parse_duration_field(hours),
            minutes: parse_duration_field(minutes),
            seconds: parse_duration_field(seconds),
        }
    }

    /// Total duration in milliseconds (saturating)
    pub fn to_millis(&self) -> u64 {
        self.hours
            .saturating_mul(3_600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
            .saturating_mul(1_000)
    }
}

/// Parse a numeric form field.
/// Reads the leading digits after trimming; anything else (empty, signs,
/// letters first) is 0. Values too large for u64 saturate.
pub fn parse_duration_field(text: &str) -> u64 {
    text.trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)))
}

/// Partially filled to-do collected by the add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TodoDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Finish the draft once a duration is known. Missing text fields become empty.
    pub fn with_duration(self, duration: DurationFields) -> NewTodo {
        NewTodo {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            duration_ms: duration.to_millis(),
        }
    }
}
