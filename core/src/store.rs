//! Storage capability used by the controller.
//!
//! # Design
//! `TodoStore` is the only seam between the controller and persistence. It
//! exposes plain create/read/update/delete/count calls; nothing here groups
//! calls into transactions, so multi-step operations built on top of it are
//! not atomic.
//!
//! `InMemoryTodoStore` keeps items in a `BTreeMap` keyed by a monotonically
//! increasing id, so iteration order is insertion order.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::types::{NewTodoItem, TodoItem, TodoItemId};

/// Persistence operations for todo items.
pub trait TodoStore: Send + Sync {
    /// Store a new item and return it with its assigned id.
    fn create(&self, item: NewTodoItem) -> Result<TodoItem, StoreError>;

    /// Write back a modified item. Returns `false` if no item has its id.
    fn update(&self, item: &TodoItem) -> Result<bool, StoreError>;

    fn find_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, StoreError>;

    /// All items in store order.
    fn find_all(&self) -> Result<Vec<TodoItem>, StoreError>;

    fn find_all_by_completed(&self, completed: bool) -> Result<Vec<TodoItem>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;

    fn count_by_completed(&self, completed: bool) -> Result<usize, StoreError>;

    /// Remove an item. Returns `false` if nothing was removed.
    fn delete_by_id(&self, id: TodoItemId) -> Result<bool, StoreError>;
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    items: BTreeMap<TodoItemId, TodoItem>,
}

/// Process-local store backed by a locked map.
#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    inner: RwLock<Inner>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for InMemoryTodoStore {
    fn create(&self, item: NewTodoItem) -> Result<TodoItem, StoreError> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let item = TodoItem {
            id: TodoItemId(inner.next_id),
            title: item.title,
            completed: item.completed,
        };
        inner.items.insert(item.id, item.clone());
        Ok(item)
    }

    fn update(&self, item: &TodoItem) -> Result<bool, StoreError> {
        let mut inner = self.inner.write();
        match inner.items.get_mut(&item.id) {
            Some(stored) => {
                stored.clone_from(item);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn find_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, StoreError> {
        Ok(self.inner.read().items.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        Ok(self.inner.read().items.values().cloned().collect())
    }

    fn find_all_by_completed(&self, completed: bool) -> Result<Vec<TodoItem>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .items
            .values()
            .filter(|item| item.completed == completed)
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().items.len())
    }

    fn count_by_completed(&self, completed: bool) -> Result<usize, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .items
            .values()
            .filter(|item| item.completed == completed)
            .count())
    }

    fn delete_by_id(&self, id: TodoItemId) -> Result<bool, StoreError> {
        Ok(self.inner.write().items.remove(&id).is_some())
    }
}
