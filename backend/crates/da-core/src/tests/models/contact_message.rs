use crate::{ContactMessage, CoreError};

use googletest::prelude::*;
use serde_json::json;

fn valid_message() -> ContactMessage {
    ContactMessage {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        company: None,
        message: "We would love a new brand portal.".to_string(),
    }
}

#[test]
fn test_valid_message_passes() {
    assert_that!(valid_message().validate(), ok(anything()));
}

#[test]
fn test_company_is_optional_when_decoding() {
    let message: ContactMessage = serde_json::from_value(json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello there, agency!",
    }))
    .unwrap();

    assert_that!(message.company, none());
}

#[test]
fn test_short_name_reports_name_field() {
    let message = ContactMessage {
        name: "A".to_string(),
        ..valid_message()
    };

    let err = message.validate().unwrap_err();

    assert_that!(err.field(), some(eq("name")));
    let CoreError::Validation { message, .. } = err;
    assert_that!(message, contains_substring("at least 2"));
}

#[test]
fn test_short_message_reports_message_field() {
    let message = ContactMessage {
        message: "Too short".to_string(),
        ..valid_message()
    };

    let err = message.validate().unwrap_err();

    assert_that!(err.field(), some(eq("message")));
}

#[test]
fn test_bad_email_reports_email_field() {
    let message = ContactMessage {
        email: "not-an-email".to_string(),
        ..valid_message()
    };

    let err = message.validate().unwrap_err();

    assert_that!(err.field(), some(eq("email")));
}
