//! Operator (librarian) running the console session

/// Name of the operator signed in at startup, recorded in the
/// session log.
#[derive(Debug, Clone)]
pub struct Operator {
    pub first_name: String,
    pub last_name: String,
}

impl Operator {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
