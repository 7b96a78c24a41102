use serde::{Deserialize, Serialize};

/// Acknowledgement for an accepted contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub status: String,
}

impl ContactResponse {
    pub fn received() -> Self {
        Self {
            status: "received".to_string(),
        }
    }
}
