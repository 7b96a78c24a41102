use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a specific field
    #[track_caller]
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::Validation { field, .. } => field.as_deref(),
        }
    }

    /// Human-readable message without the source location
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
