use std::collections::BTreeMap;

use thiserror::Error;

/// Per-field validation messages, keyed by the JSON field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error("Invalid input")]
    InvalidInput(FieldErrors),
    #[error("{0}")]
    BusinessRule(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        DomainError::NotFound { entity, id }
    }

    /// A single-field validation failure.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field.to_string(), vec![message.into()]);
        DomainError::InvalidInput(fields)
    }
}
