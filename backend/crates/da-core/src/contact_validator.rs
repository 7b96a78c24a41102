use crate::{
    ContactMessage, CoreError, MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_PART_LENGTH, MAX_MESSAGE_LENGTH,
    MIN_MESSAGE_LENGTH, MIN_NAME_LENGTH, Result as CoreResult,
};

/// Validates contact form submissions before they reach the store
pub struct ContactValidator;

impl ContactValidator {
    /// Validate every field of a contact message, stopping at the first failure
    #[track_caller]
    pub fn validate(message: &ContactMessage) -> CoreResult<()> {
        Self::validate_min_length(&message.name, "name", MIN_NAME_LENGTH)?;
        Self::validate_email(&message.email)?;
        Self::validate_length(
            &message.message,
            "message",
            MIN_MESSAGE_LENGTH,
            MAX_MESSAGE_LENGTH,
        )?;
        Ok(())
    }

    /// Validate a string field has at least `min_length` characters
    #[track_caller]
    pub fn validate_min_length(value: &str, field_name: &str, min_length: usize) -> CoreResult<()> {
        if value.chars().count() < min_length {
            return Err(CoreError::validation(
                field_name,
                format!("{} must be at least {} characters", field_name, min_length),
            ));
        }

        Ok(())
    }

    /// Validate a string field length is within `min_length..=max_length` characters
    #[track_caller]
    pub fn validate_length(
        value: &str,
        field_name: &str,
        min_length: usize,
        max_length: usize,
    ) -> CoreResult<()> {
        Self::validate_min_length(value, field_name, min_length)?;

        if value.chars().count() > max_length {
            return Err(CoreError::validation(
                field_name,
                format!("{} must not exceed {} characters", field_name, max_length),
            ));
        }

        Ok(())
    }

    /// Validate an email address (`local@domain.tld`)
    #[track_caller]
    pub fn validate_email(email: &str) -> CoreResult<()> {
        let invalid = |reason: &str| {
            CoreError::validation("email", format!("email is not a valid address: {}", reason))
        };

        if email.is_empty() {
            return Err(CoreError::validation("email", "email cannot be empty"));
        }

        if email.len() > MAX_EMAIL_LENGTH {
            return Err(invalid("too long"));
        }

        if email.chars().any(char::is_whitespace) {
            return Err(invalid("contains whitespace"));
        }

        let Some((local, domain)) = email.split_once('@') else {
            return Err(invalid("missing '@'"));
        };

        if domain.contains('@') {
            return Err(invalid("more than one '@'"));
        }

        if local.is_empty() || local.len() > MAX_EMAIL_LOCAL_PART_LENGTH {
            return Err(invalid("bad local part"));
        }

        if !domain.contains('.') {
            return Err(invalid("domain has no '.'"));
        }

        let labels_ok = domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'));
        if !labels_ok {
            return Err(invalid("bad domain"));
        }

        Ok(())
    }
}
