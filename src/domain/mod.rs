pub mod draft;
pub mod enums;
pub mod item;
pub mod store;
pub mod views;

pub use draft::{parse_duration_field, DurationFields, TodoDraft};
pub use enums::{DraftField, TimerField, UiMode};
pub use item::{NewTodo, RemainingTime, TodoId, TodoItem};
pub use store::{StoreError, TodoStore};
pub use views::{clamp_selection, countdown_glyph, due_at, format_clock, DUE_BANNER, EMPTY_LIST};
