//! Book model and related types.
//!
//! Field names in the persisted JSON file are PascalCase (`Title`,
//! `Author`, `CheckedOut`), kept for compatibility with existing
//! book files.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_name_part;

/// A catalog entry. Identity is the (title, author) pair; there is
/// no synthetic id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub checked_out: bool,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            checked_out: false,
        }
    }

    /// Case-insensitive title match.
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive match against the full `"first last"` author string.
    pub fn matches_author(&self, author: &str) -> bool {
        self.author.to_lowercase() == author.to_lowercase()
    }

    pub fn availability(&self) -> &'static str {
        if self.checked_out {
            "checked out"
        } else {
            "available"
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.author)
    }
}

/// Add-book request
#[derive(Debug, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    #[validate(custom(function = validate_name_part))]
    pub author_first_name: String,
    #[validate(custom(function = validate_name_part))]
    pub author_last_name: String,
}
