use super::item::{TodoItem, TICK_STEP_MS};
use chrono::{DateTime, Duration, Local};

/// Banner shown while any item is due
pub const DUE_BANNER: &str = "You have a due todo!";

/// Placeholder for an empty list
pub const EMPTY_LIST: &str = "No to-do items!";

/// Choose the row glyph for an item
pub fn countdown_glyph(item: &TodoItem, use_emoji: bool) -> &'static str {
    match (item.is_expired(), use_emoji) {
        (true, true) => "🔔",
        (false, true) => "⏳",
        (true, false) => "!",
        (false, false) => "-",
    }
}

/// Wall-clock time of the tick that makes the item due, or None if it already is.
/// Countdowns move in whole ticks, so that is one tick per full second left.
pub fn due_at(item: &TodoItem, now: DateTime<Local>) -> Option<DateTime<Local>> {
    if item.is_expired() {
        return None;
    }

    let ticks_left = item.remaining_ms() / TICK_STEP_MS;
    let until_due = i64::try_from(ticks_left.saturating_mul(TICK_STEP_MS)).ok()?;
    now.checked_add_signed(Duration::milliseconds(until_due))
}

/// Format time as HH:MM:SS
pub fn format_clock(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Keep a selection index inside a list of `len` rows
pub fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        selected.min(len - 1)
    }
}
