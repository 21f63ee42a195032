/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTodo,   // Title and description
    SettingTimer, // Hours, minutes and seconds
}

/// Text field being edited on the "Add To-Do" form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
}

impl DraftField {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
        }
    }
}

/// Numeric field being edited on the "Add Timer" form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerField {
    Hours,
    Minutes,
    Seconds,
}

impl TimerField {
    pub fn next(&self) -> Self {
        match self {
            Self::Hours => Self::Minutes,
            Self::Minutes => Self::Seconds,
            Self::Seconds => Self::Hours,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hours => "Hours",
            Self::Minutes => "Minutes",
            Self::Seconds => "Seconds",
        }
    }

    pub fn all() -> &'static [TimerField] {
        &[TimerField::Hours, TimerField::Minutes, TimerField::Seconds]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_field_cycles() {
        assert_eq!(DraftField::Title.next(), DraftField::Description);
        assert_eq!(DraftField::Description.next(), DraftField::Title);
    }

    #[test]
    fn test_timer_field_cycles() {
        let mut field = TimerField::Hours;
        for expected in [TimerField::Minutes, TimerField::Seconds, TimerField::Hours] {
            field = field.next();
            assert_eq!(field, expected);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(DraftField::Description.label(), "Description");
        assert_eq!(TimerField::Seconds.label(), "Seconds");
        assert_eq!(TimerField::all().len(), 3);
    }
}
