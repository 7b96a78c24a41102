//! Contact form submission.

use crate::{ContactValidator, Result as CoreResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Reply-to email
    pub email: String,
    /// Company or organization
    #[serde(default)]
    pub company: Option<String>,
    /// Inquiry details
    pub message: String,
}

impl ContactMessage {
    /// Check the message against the contact form constraints
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        ContactValidator::validate(self)
    }
}
