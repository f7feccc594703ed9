//! Request-to-store translation for the todo list.
//!
//! # Design
//! `TodoController` holds only a shared `TodoStore` handle. Each operation
//! reads or mutates the store and returns a `Reply`; choosing between a
//! redirect and a fragment is driven by the `RequestMode` the caller passes
//! in. Read-modify-write sequences (toggles) are not atomic: concurrent
//! toggles of one item may lose an update.

use std::sync::Arc;

use tracing::debug;

use crate::error::{TodoError, ValidationErrors};
use crate::http::{IndexPage, Reply, RequestMode, Trigger};
use crate::store::TodoStore;
use crate::types::{ItemCounts, ListFilter, NewTodoItem, TodoItemForm, TodoItemId, TodoItemView};
use crate::validation::validate_form;

#[derive(Clone)]
pub struct TodoController {
    store: Arc<dyn TodoStore>,
}

impl TodoController {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Build the index page for `filter` with an empty new-item form.
    pub fn render_index(&self, filter: ListFilter) -> Result<IndexPage, TodoError> {
        self.index_page(filter, TodoItemForm::default(), None)
    }

    pub fn add_item(&self, form: TodoItemForm, mode: RequestMode) -> Result<Reply, TodoError> {
        let title = match validate_form(&form) {
            Ok(title) => title,
            Err(errors) if mode.is_fragment() => return Err(errors.into()),
            Err(errors) => {
                debug!(%errors, "rejected new item");
                let page = self.index_page(ListFilter::All, form, Some(errors))?;
                return Ok(Reply::Page(Box::new(page)));
            }
        };

        let item = self.store.create(NewTodoItem::active(title))?;
        debug!(id = %item.id, "added item");

        Ok(match mode {
            RequestMode::FullPage => Reply::redirect_to_index(),
            RequestMode::Fragment => Reply::Item {
                item: item.into(),
                trigger: Some(Trigger::ItemAdded),
            },
        })
    }

    /// Flip one item's completion flag.
    pub fn toggle_item(&self, id: TodoItemId, mode: RequestMode) -> Result<Reply, TodoError> {
        let mut item = self.store.find_by_id(id)?.ok_or(TodoError::NotFound(id))?;
        item.toggle();
        if !self.store.update(&item)? {
            return Err(TodoError::NotFound(id));
        }
        debug!(%id, completed = item.completed, "toggled item");

        Ok(match mode {
            RequestMode::FullPage => Reply::redirect_to_index(),
            RequestMode::Fragment => Reply::Item {
                item: item.into(),
                trigger: Some(Trigger::ItemCompletionToggled),
            },
        })
    }

    /// Flip every item, one store write at a time.
    pub fn toggle_all(&self) -> Result<Reply, TodoError> {
        let items = self.store.find_all()?;
        let count = items.len();
        for mut item in items {
            item.toggle();
            self.store.update(&item)?;
        }
        debug!(count, "toggled all items");
        Ok(Reply::redirect_to_index())
    }

    /// Remove one item. Missing ids are not an error.
    pub fn delete_item(&self, id: TodoItemId, mode: RequestMode) -> Result<Reply, TodoError> {
        let removed = self.store.delete_by_id(id)?;
        debug!(%id, removed, "deleted item");

        Ok(match mode {
            RequestMode::FullPage => Reply::redirect_to_index(),
            RequestMode::Fragment => Reply::Empty {
                trigger: Some(Trigger::ItemDeleted),
            },
        })
    }

    pub fn delete_completed_items(&self) -> Result<Reply, TodoError> {
        let completed = self.store.find_all_by_completed(true)?;
        let count = completed.len();
        for item in completed {
            self.store.delete_by_id(item.id)?;
        }
        debug!(count, "deleted completed items");
        Ok(Reply::redirect_to_index())
    }

    pub fn active_items_count(&self) -> Result<Reply, TodoError> {
        Ok(Reply::ActiveCount(self.store.count_by_completed(false)?))
    }

    /// Items passing `filter`, projected in store order.
    pub fn todo_items(&self, filter: ListFilter) -> Result<Vec<TodoItemView>, TodoError> {
        let items = match filter.completed() {
            None => self.store.find_all()?,
            Some(completed) => self.store.find_all_by_completed(completed)?,
        };
        Ok(items.into_iter().map(TodoItemView::from).collect())
    }

    pub fn counts(&self) -> Result<ItemCounts, TodoError> {
        Ok(ItemCounts {
            total: self.store.count()?,
            active: self.store.count_by_completed(false)?,
            completed: self.store.count_by_completed(true)?,
        })
    }

    fn index_page(
        &self,
        filter: ListFilter,
        form: TodoItemForm,
        form_errors: Option<ValidationErrors>,
    ) -> Result<IndexPage, TodoError> {
        Ok(IndexPage {
            form,
            form_errors,
            filter,
            todos: self.todo_items(filter)?,
            counts: self.counts()?,
        })
    }

    #[cfg(test)]
    fn find(&self, id: TodoItemId) -> Option<crate::types::TodoItem> {
        self.store.find_by_id(id).unwrap()
    }
}
