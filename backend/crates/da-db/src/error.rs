use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum StoreError {
    #[error("Document store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document store query failed: {message} {location}")]
    Query {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document store write failed: {message} {location}")]
    Write {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn query<S: Into<String>>(message: S) -> Self {
        Self::Query {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write<S: Into<String>>(message: S) -> Self {
        Self::Write {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Underlying failure description, without the source location
    pub fn message(&self) -> &str {
        match self {
            Self::Unavailable { message, .. }
            | Self::Query { message, .. }
            | Self::Write { message, .. } => message,
        }
    }

    /// Client-safe description: failure kind plus the underlying message
    pub fn description(&self) -> String {
        match self {
            Self::Unavailable { message, .. } => format!("Document store unavailable: {message}"),
            Self::Query { message, .. } => format!("Document store query failed: {message}"),
            Self::Write { message, .. } => format!("Document store write failed: {message}"),
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
