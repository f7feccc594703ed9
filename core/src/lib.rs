//! Framework-free core of the TodoMVC service.
//!
//! # Overview
//! `TodoController` turns list/add/toggle/delete operations into calls on an
//! injected `TodoStore` and answers with a `Reply` value. The HTTP layer
//! decides how a `Reply` is written to the wire, keeping this crate free of
//! any web framework and easy to test.
//!
//! # Design
//! - The store is a trait object so the controller is storage-agnostic;
//!   `InMemoryTodoStore` is the bundled implementation.
//! - Full-page and fragment responses are chosen by `RequestMode`, and
//!   fragments carry an optional `Trigger` naming the out-of-band event.
//! - Titles are validated before anything is written.

pub mod controller;
pub mod error;
pub mod http;
pub mod store;
pub mod types;
pub mod validation;

pub use controller::TodoController;
pub use error::{FieldError, StoreError, TodoError, ValidationErrors};
pub use http::{IndexPage, Reply, RequestMode, Trigger, INDEX_PATH};
pub use store::{InMemoryTodoStore, TodoStore};
pub use types::{ItemCounts, ListFilter, NewTodoItem, TodoItem, TodoItemForm, TodoItemId, TodoItemView};
pub use validation::{validate_form, MAX_TITLE_LENGTH};
