use crate::ApiError;

use da_core::CoreError;
use da_db::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "No route for /nope".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No route for /nope");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("email", "email must contain '@'");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "boom");
}

#[test]
fn test_core_validation_error_keeps_field_and_message() {
    let core = CoreError::validation("name", "name must be at least 2 characters");

    let api: ApiError = core.into();

    match api {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "name must be at least 2 characters");
            assert_eq!(field.as_deref(), Some("name"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_store_error_converts_to_internal_with_description() {
    let api: ApiError = StoreError::write("disk full").into();

    match api {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Document store write failed: disk full");
        }
        other => panic!("Expected Internal, got {:?}", other),
    }
}
