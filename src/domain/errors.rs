// src/domain/errors.rs
use serde::Serialize;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A single failed form rule, addressed by the field path the editor shows it on
/// (`title`, `slug`, `content.0.content`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid form: {} field error(s)", .0.len())]
    InvalidForm(Vec<FieldError>),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Message of a validation failure without the variant prefix.
    pub fn reason(&self) -> String {
        match self {
            DomainError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
