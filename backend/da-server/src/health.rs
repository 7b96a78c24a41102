use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// GET / - liveness
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Design Agency Backend is running"))
}

/// GET /api/hello - liveness under the API prefix
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the backend API!"))
}
