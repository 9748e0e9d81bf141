// src/application/error.rs
use crate::domain::errors::{DomainError, FieldError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn invalid_form(errors: Vec<FieldError>) -> Self {
        Self::Domain(DomainError::InvalidForm(errors))
    }

    /// Per-field failures when the error came from form validation.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            ApplicationError::Domain(DomainError::InvalidForm(errors)) => Some(errors),
            _ => None,
        }
    }

    /// Short machine-readable kind, used by hosts reporting the error.
    pub fn kind(&self) -> &'static str {
        match self {
            ApplicationError::Validation(_)
            | ApplicationError::Domain(DomainError::Validation(_)) => "validation",
            ApplicationError::Domain(DomainError::InvalidForm(_)) => "invalid_form",
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
                "not_found"
            }
            ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_)) => {
                "conflict"
            }
            ApplicationError::Infrastructure(_)
            | ApplicationError::Domain(DomainError::Persistence(_)) => "infrastructure",
        }
    }
}
