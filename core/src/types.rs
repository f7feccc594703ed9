//! Domain types for the todo list.
//!
//! # Design
//! `TodoItem` is the stored entity and is only ever handed out by a
//! `TodoStore`. Rendering works from `TodoItemView`, a projection built fresh
//! for every response, so templates never hold on to store-owned values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoItemId(pub u64);

impl fmt::Display for TodoItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(TodoItemId)
    }
}

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoItemId,
    pub title: String,
    pub completed: bool,
}

impl TodoItem {
    /// Flip the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// An item that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
    pub completed: bool,
}

impl NewTodoItem {
    pub fn active(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

/// Read-only projection of a `TodoItem` used for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItemView {
    pub id: TodoItemId,
    pub title: String,
    pub completed: bool,
}

impl From<&TodoItem> for TodoItemView {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            completed: item.completed,
        }
    }
}

impl From<TodoItem> for TodoItemView {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            completed: item.completed,
        }
    }
}

/// Selects which items populate a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ListFilter {
    /// The `completed` value an item must have to pass, or `None` for all.
    pub fn completed(self) -> Option<bool> {
        match self {
            ListFilter::All => None,
            ListFilter::Active => Some(false),
            ListFilter::Completed => Some(true),
        }
    }

    /// Canonical list path for this filter.
    pub fn path(self) -> &'static str {
        match self {
            ListFilter::All => "/",
            ListFilter::Active => "/active",
            ListFilter::Completed => "/completed",
        }
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItemForm {
    #[serde(default)]
    pub title: String,
}

/// Item totals shown in the page footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ItemCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}
