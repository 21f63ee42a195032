use super::item::{NewTodo, TodoId, TodoItem};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("index {index} out of range for list of length {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("to-do item not found: {0}")]
    UnknownId(TodoId),
}

/// Ordered, in-memory collection of to-do items
#[derive(Debug, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item to the end of the list
    pub fn add(&mut self, new: NewTodo) -> TodoId {
        let item = TodoItem::new(new);
        let id = item.id();
        tracing::info!(
            id = %id,
            title = %item.title(),
            duration_ms = item.remaining_ms(),
            "todo added"
        );
        self.items.push(item);
        id
    }

    /// Remove the item at `index`, shifting later items left
    pub fn remove(&mut self, index: usize) -> Result<TodoItem, StoreError> {
        if index >= self.items.len() {
            return Err(StoreError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);
        tracing::info!(id = %item.id(), index, "todo removed");
        Ok(item)
    }

    /// Remove the item with the given id
    pub fn remove_by_id(&mut self, id: TodoId) -> Result<TodoItem, StoreError> {
        let index = self
            .position(id)
            .ok_or(StoreError::UnknownId(id))?;
        self.remove(index)
    }

    /// Advance every countdown by one tick. Order is never changed.
    pub fn tick(&mut self) {
        for item in &mut self.items {
            let was_expired = item.is_expired();
            item.tick();
            if !was_expired && item.is_expired() {
                tracing::info!(id = %item.id(), remaining_ms = item.remaining_ms(), "todo due");
            }
        }
    }

    /// Read-only snapshot in display order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True while at least one item is due. Recomputed on every call.
    pub fn has_due_item(&self) -> bool {
        self.items.iter().any(TodoItem::is_expired)
    }
}
