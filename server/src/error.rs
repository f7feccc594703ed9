//! Mapping of controller errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use todomvc_core::TodoError;
use tracing::{error, warn};

use crate::views;

/// Error returned by route handlers.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AppError(#[from] pub TodoError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TodoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.0 {
            TodoError::NotFound(id) => {
                warn!(%id, "todo item not found");
                views::error_message(&format!("Todo item {id} does not exist."))
            }
            TodoError::Validation(errors) => views::validation_errors(errors),
            TodoError::Store(err) => {
                error!(error = %err, "store failure");
                views::error_message("Something went wrong. Please try again.")
            }
        };
        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use todomvc_core::{FieldError, StoreError, TodoItemId, ValidationErrors};

    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            AppError(TodoError::NotFound(TodoItemId(1))).status(),
            StatusCode::NOT_FOUND
        );
        let invalid = ValidationErrors(vec![FieldError::new("title", "must not be blank")]);
        assert_eq!(
            AppError(invalid.into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError(StoreError::Unavailable("down".into()).into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_is_html() {
        let response = AppError(TodoError::NotFound(TodoItemId(3))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }
}
