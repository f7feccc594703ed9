//! HTTP layer of the TodoMVC service.
//!
//! # Design
//! Handlers are thin: they pull the `RequestMode` from the `HX-Request`
//! header, call the matching `TodoController` operation and render the
//! resulting `Reply`. Full-page mutations answer with `303 See Other` to
//! `/`; fragment mutations answer with a small HTML snippet and an
//! `HX-Trigger` naming the event other page regions listen for.

pub mod config;
pub mod error;
pub mod htmx;
pub mod logging;
pub mod views;

use std::{future::Future, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, put},
    Form, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use todomvc_core::{
    InMemoryTodoStore, ListFilter, Reply, RequestMode, TodoController, TodoError, TodoItemForm,
    TodoItemId,
};

use crate::error::AppError;
use crate::htmx::Mode;

/// Router backed by a fresh in-memory store.
pub fn app() -> Router {
    router(TodoController::new(Arc::new(InMemoryTodoStore::new())))
}

pub fn router(controller: TodoController) -> Router {
    Router::new()
        .route("/", get(index).post(add_item))
        .route("/active", get(index_active))
        .route("/completed", get(index_completed).delete(delete_completed_items))
        .route("/active-items-count", get(active_items_count))
        .route("/toggle-all", put(toggle_all))
        .route("/{id}", delete(delete_item))
        .route("/{id}/toggle", put(toggle_item))
        .layer(TraceLayer::new_for_http())
        .with_state(controller)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `router` until `shutdown` resolves, letting in-flight requests finish.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Create one active item per title, skipping titles that fail validation.
pub fn seed_items(controller: &TodoController, titles: &[String]) -> Result<usize, TodoError> {
    let mut created = 0;
    for title in titles {
        let form = TodoItemForm {
            title: title.clone(),
        };
        match controller.add_item(form, RequestMode::Fragment) {
            Ok(_) => created += 1,
            Err(TodoError::Validation(errors)) => warn!(%title, %errors, "skipping seed item"),
            Err(err) => return Err(err),
        }
    }
    info!(created, "seeded items");
    Ok(created)
}

/// Writes a controller `Reply` as an HTML response.
pub struct HtmlReply(pub Reply);

impl IntoResponse for HtmlReply {
    fn into_response(self) -> Response {
        let trigger = self.0.trigger();
        let mut response = match self.0 {
            Reply::Redirect { location } => Redirect::to(location).into_response(),
            Reply::Page(page) => {
                let status = if page.form_errors.is_some() {
                    StatusCode::UNPROCESSABLE_ENTITY
                } else {
                    StatusCode::OK
                };
                (status, Html(views::index_page(&page))).into_response()
            }
            Reply::Item { item, .. } => Html(views::todo_item(&item)).into_response(),
            Reply::ActiveCount(count) => Html(views::active_items_count(count)).into_response(),
            Reply::Empty { .. } => Html(String::new()).into_response(),
        };
        if let Some(trigger) = trigger {
            htmx::set_trigger(&mut response, trigger);
        }
        response
    }
}

async fn index(State(controller): State<TodoController>) -> Result<Html<String>, AppError> {
    render_index(&controller, ListFilter::All)
}

async fn index_active(State(controller): State<TodoController>) -> Result<Html<String>, AppError> {
    render_index(&controller, ListFilter::Active)
}

async fn index_completed(
    State(controller): State<TodoController>,
) -> Result<Html<String>, AppError> {
    render_index(&controller, ListFilter::Completed)
}

fn render_index(controller: &TodoController, filter: ListFilter) -> Result<Html<String>, AppError> {
    let page = controller.render_index(filter)?;
    Ok(Html(views::index_page(&page)))
}

async fn add_item(
    State(controller): State<TodoController>,
    Mode(mode): Mode,
    Form(form): Form<TodoItemForm>,
) -> Result<HtmlReply, AppError> {
    Ok(HtmlReply(controller.add_item(form, mode)?))
}

async fn toggle_item(
    State(controller): State<TodoController>,
    Mode(mode): Mode,
    Path(id): Path<TodoItemId>,
) -> Result<HtmlReply, AppError> {
    Ok(HtmlReply(controller.toggle_item(id, mode)?))
}

async fn toggle_all(State(controller): State<TodoController>) -> Result<HtmlReply, AppError> {
    Ok(HtmlReply(controller.toggle_all()?))
}

async fn delete_item(
    State(controller): State<TodoController>,
    Mode(mode): Mode,
    Path(id): Path<TodoItemId>,
) -> Result<HtmlReply, AppError> {
    Ok(HtmlReply(controller.delete_item(id, mode)?))
}

async fn delete_completed_items(
    State(controller): State<TodoController>,
) -> Result<HtmlReply, AppError> {
    Ok(HtmlReply(controller.delete_completed_items()?))
}

async fn active_items_count(
    State(controller): State<TodoController>,
) -> Result<HtmlReply, AppError> {
    Ok(HtmlReply(controller.active_items_count()?))
}

#[cfg(test)]
mod tests {
    use todomvc_core::Trigger;

    use super::*;

    #[test]
    fn redirect_reply_is_see_other() {
        let response = HtmlReply(Reply::redirect_to_index()).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
        assert!(response.headers().get(htmx::HX_TRIGGER).is_none());
    }

    #[test]
    fn empty_reply_carries_trigger() {
        let response = HtmlReply(Reply::Empty {
            trigger: Some(Trigger::ItemDeleted),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[htmx::HX_TRIGGER], "itemDeleted");
    }

    #[test]
    fn seed_skips_blank_titles() {
        let controller = TodoController::new(Arc::new(InMemoryTodoStore::new()));
        let titles = vec!["Buy milk".to_string(), "  ".to_string(), "Walk dog".to_string()];
        assert_eq!(seed_items(&controller, &titles).unwrap(), 2);
        assert_eq!(controller.counts().unwrap().total, 2);
    }
}
