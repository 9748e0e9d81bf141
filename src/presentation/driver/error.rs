// src/presentation/driver/error.rs
use crate::application::error::ApplicationError;
use crate::domain::errors::FieldError;
use serde::Serialize;

/// Failure reported back to the host as one JSON line; the session stays open.
#[derive(Debug, Serialize)]
pub struct DriverError {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl DriverError {
    pub fn from_error(action: &'static str, err: ApplicationError) -> Self {
        let fields = err.field_errors().map(<[FieldError]>::to_vec).unwrap_or_default();
        Self {
            ok: false,
            action: Some(action),
            error: err.kind(),
            message: err.to_string(),
            fields,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            action: None,
            error: "malformed",
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn no_open_form(action: &'static str) -> Self {
        Self {
            ok: false,
            action: Some(action),
            error: "no_form",
            message: "no form is open; send create or edit first".into(),
            fields: Vec::new(),
        }
    }
}

pub type DriverResult<T> = Result<T, DriverError>;

pub trait IntoDriverResult<T> {
    fn into_driver(self, action: &'static str) -> DriverResult<T>;
}

impl<T> IntoDriverResult<T> for Result<T, ApplicationError> {
    fn into_driver(self, action: &'static str) -> DriverResult<T> {
        self.map_err(|err| DriverError::from_error(action, err))
    }
}
