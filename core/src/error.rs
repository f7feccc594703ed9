//! Error types for the todo controller and its store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the HTTP layer maps it to a
//! client error, while store failures are surfaced as server errors.
//! Validation failures carry every field error so a form can be re-rendered
//! with all of them at once.

use thiserror::Error;

use crate::types::TodoItemId;

/// Failure reported by a `TodoStore` implementation.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing storage could not be reached or rejected the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// One or more field errors for a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid form: {}", join_field_errors(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    /// Messages recorded against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Errors returned by `TodoController` operations.
#[derive(Debug, Clone, Error)]
pub enum TodoError {
    /// No item with this id exists in the store.
    #[error("todo item {0} not found")]
    NotFound(TodoItemId),

    /// The submitted form failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The store failed while serving the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
