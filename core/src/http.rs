//! Response shapes produced by the controller.
//!
//! # Design
//! The controller never touches a web framework. It receives a
//! `RequestMode` and returns a `Reply` describing what to send: a redirect,
//! a full page, or a fragment, optionally tagged with a `Trigger` that the
//! HTTP layer turns into an out-of-band header.

use crate::error::ValidationErrors;
use crate::types::{ItemCounts, ListFilter, TodoItemForm, TodoItemView};

/// Path every full-page mutation redirects to.
pub const INDEX_PATH: &str = "/";

/// Whether the caller wants a whole document or a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    #[default]
    FullPage,
    Fragment,
}

impl RequestMode {
    pub fn is_fragment(self) -> bool {
        self == RequestMode::Fragment
    }
}

/// Named signal telling the client to refresh other page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    ItemAdded,
    ItemCompletionToggled,
    ItemDeleted,
}

impl Trigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::ItemAdded => "itemAdded",
            Trigger::ItemCompletionToggled => "itemCompletionToggled",
            Trigger::ItemDeleted => "itemDeleted",
        }
    }
}

/// Everything the index page needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPage {
    pub form: TodoItemForm,
    pub form_errors: Option<ValidationErrors>,
    pub filter: ListFilter,
    pub todos: Vec<TodoItemView>,
    pub counts: ItemCounts,
}

/// What the HTTP layer should send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// "See other" redirect to `location`.
    Redirect { location: &'static str },

    /// A complete document.
    Page(Box<IndexPage>),

    /// The fragment for a single item.
    Item {
        item: TodoItemView,
        trigger: Option<Trigger>,
    },

    /// The live active-item counter.
    ActiveCount(usize),

    /// An empty body.
    Empty { trigger: Option<Trigger> },
}

impl Reply {
    pub fn redirect_to_index() -> Self {
        Reply::Redirect {
            location: INDEX_PATH,
        }
    }

    pub fn trigger(&self) -> Option<Trigger> {
        match self {
            Reply::Item { trigger, .. } | Reply::Empty { trigger } => *trigger,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoItemId;

    #[test]
    fn trigger_names_match_client_events() {
        assert_eq!(Trigger::ItemAdded.as_str(), "itemAdded");
        assert_eq!(Trigger::ItemCompletionToggled.as_str(), "itemCompletionToggled");
        assert_eq!(Trigger::ItemDeleted.as_str(), "itemDeleted");
    }

    #[test]
    fn only_fragments_carry_triggers() {
        let item = Reply::Item {
            item: TodoItemView {
                id: TodoItemId(1),
                title: "a".to_string(),
                completed: false,
            },
            trigger: Some(Trigger::ItemAdded),
        };
        assert_eq!(item.trigger(), Some(Trigger::ItemAdded));
        assert_eq!(Reply::redirect_to_index().trigger(), None);
        assert_eq!(Reply::ActiveCount(3).trigger(), None);
    }

    #[test]
    fn default_mode_is_full_page() {
        assert!(!RequestMode::default().is_fragment());
        assert!(RequestMode::Fragment.is_fragment());
    }
}
