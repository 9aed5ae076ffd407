//! Data models for the Berry catalog

use validator::ValidationError;

pub mod book;
pub mod operator;
pub mod patron;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use operator::Operator;
pub use patron::{CreatePatron, Patron};

/// Name parts are single words; embedded whitespace breaks the
/// space-separated matching used everywhere else.
pub(crate) fn validate_name_part(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.chars().any(char::is_whitespace) {
        let mut error = ValidationError::new("name_part");
        error.message = Some("must be a single word with no spaces".into());
        return Err(error);
    }
    Ok(())
}
