//! Title validation for the new-item form.

use crate::error::{FieldError, ValidationErrors};
use crate::types::TodoItemForm;

/// Longest accepted title, counted in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Check the form and return the trimmed title to store.
pub fn validate_form(form: &TodoItemForm) -> Result<String, ValidationErrors> {
    let title = form.title.trim();
    let mut errors = Vec::new();

    if title.is_empty() {
        errors.push(FieldError::new("title", "must not be blank"));
    } else if title.chars().count() > MAX_TITLE_LENGTH {
        errors.push(FieldError::new(
            "title",
            format!("must be at most {MAX_TITLE_LENGTH} characters"),
        ));
    }

    if errors.is_empty() {
        Ok(title.to_string())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str) -> TodoItemForm {
        TodoItemForm {
            title: title.to_string(),
        }
    }

    #[test]
    fn accepts_plain_title() {
        assert_eq!(validate_form(&form("Buy milk")).unwrap(), "Buy milk");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_form(&form("  Buy milk \n")).unwrap(), "Buy milk");
    }

    #[test]
    fn rejects_empty_and_blank() {
        for title in ["", "   ", "\t\n"] {
            let errors = validate_form(&form(title)).unwrap_err();
            assert_eq!(errors.for_field("title").collect::<Vec<_>>(), ["must not be blank"]);
        }
    }

    #[test]
    fn length_limit_counts_characters() {
        let at_limit = "é".repeat(MAX_TITLE_LENGTH);
        assert!(validate_form(&form(&at_limit)).is_ok());

        let over = "x".repeat(MAX_TITLE_LENGTH + 1);
        let errors = validate_form(&form(&over)).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert!(errors.0[0].message.contains("255"));
    }
}
