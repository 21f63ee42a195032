use std::fmt;
use uuid::Uuid;

/// Amount removed from every countdown on each tick
pub const TICK_STEP_MS: u64 = 1_000;

/// Items with less than this much time left are due
pub const EXPIRY_THRESHOLD_MS: u64 = 1_000;

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// Synthetic identity assigned when an item is created.
/// Titles are free text and may repeat, so the UI removes items by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(Uuid);

impl TodoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Values needed to create a to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

/// A single to-do entry with its countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: TodoId,
    title: String,
    description: String,
    remaining_ms: u64,
}

impl TodoItem {
    pub fn new(new: NewTodo) -> Self {
        Self {
            id: TodoId::new(),
            title: new.title,
            description: new.description,
            remaining_ms: new.duration_ms,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Count down by one tick.
    /// Below one full step the value is left untouched, so a countdown that
    /// did not start on a whole second freezes just above zero.
    pub fn tick(&mut self) {
        if self.remaining_ms >= TICK_STEP_MS {
            self.remaining_ms -= TICK_STEP_MS;
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms < EXPIRY_THRESHOLD_MS
    }

    pub fn format_remaining(&self) -> RemainingTime {
        RemainingTime::from_millis(self.remaining_ms)
    }
}

/// Display breakdown of a countdown.
/// Hours wrap at 24, so anything a day or longer shows modulo a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    pub fn from_millis(ms: u64) -> Self {
        let hours = (ms / MS_PER_HOUR) % 24;
        let minutes = (ms / MS_PER_MINUTE) % 60;
        // Round half up to the nearest second
        let seconds = ((ms % MS_PER_MINUTE + MS_PER_SECOND / 2) / MS_PER_SECOND) % 60;

        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_item(remaining_ms: u64) -> TodoItem {
        TodoItem::new(NewTodo {
            title: "Test".to_string(),
            description: String::new(),
            duration_ms: remaining_ms,
        })
    }

    #[test]
    fn test_item_new() {
        let item = TodoItem::new(NewTodo {
            title: "Buy milk".to_string(),
            description: "2 litres".to_string(),
            duration_ms: 5_000,
        });
        assert_eq!(item.title(), "Buy milk");
        assert_eq!(item.description(), "2 litres");
        assert_eq!(item.remaining_ms(), 5_000);
    }

    #[test]
    fn test_items_get_distinct_ids() {
        let a = create_test_item(1_000);
        let b = create_test_item(1_000);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_tick_at_zero_stays_zero() {
        let mut item = create_test_item(0);
        item.tick();
        assert_eq!(item.remaining_ms(), 0);
    }

    #[test]
    fn test_tick_freezes_below_one_second() {
        let mut item = create_test_item(1_500);
        item.tick();
        assert_eq!(item.remaining_ms(), 500);

        // Frozen: never reaches zero through ticking
        item.tick();
        assert_eq!(item.remaining_ms(), 500);
    }

    #[test]
    fn test_tick_reaches_zero_on_whole_seconds() {
        let mut item = create_test_item(2_000);
        item.tick();
        item.tick();
        assert_eq!(item.remaining_ms(), 0);
        item.tick();
        assert_eq!(item.remaining_ms(), 0);
    }

    #[test]
    fn test_is_expired_threshold() {
        assert!(create_test_item(0).is_expired());
        assert!(create_test_item(999).is_expired());
        assert!(!create_test_item(1_000).is_expired());
        assert!(!create_test_item(60_000).is_expired());
    }

    #[test]
    fn test_format_remaining() {
        let rt = RemainingTime::from_millis(3_661_000);
        assert_eq!(
            rt,
            RemainingTime {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(rt.to_string(), "1:1:1");
    }

    #[test]
    fn test_format_remaining_hours_wrap() {
        // 25 hours shows as 1
        let rt = RemainingTime::from_millis(90_000_000);
        assert_eq!(rt.hours, 1);
        assert_eq!(rt.minutes, 0);
        assert_eq!(rt.seconds, 0);
    }

    #[test]
    fn test_format_remaining_rounds_seconds() {
        assert_eq!(RemainingTime::from_millis(1_499).seconds, 1);
        assert_eq!(RemainingTime::from_millis(1_500).seconds, 2);
        assert_eq!(RemainingTime::from_millis(500).seconds, 1);
        assert_eq!(RemainingTime::from_millis(499).seconds, 0);

        // 59.5s rounds to 60, which wraps to 0 without carrying into minutes
        let rt = RemainingTime::from_millis(59_500);
        assert_eq!(rt.minutes, 0);
        assert_eq!(rt.seconds, 0);
    }

    #[test]
    fn test_format_remaining_no_padding() {
        let item = create_test_item(2 * 3_600_000 + 5 * 60_000 + 7_000);
        assert_eq!(item.format_remaining().to_string(), "2:5:7");
    }
}
