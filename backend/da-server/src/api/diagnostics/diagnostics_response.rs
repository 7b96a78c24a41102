use da_config::DatabaseConfig;

use serde::{Deserialize, Serialize};

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DATABASE_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DATABASE_WORKING: &str = "✅ Connected & Working";
pub const DATABASE_ERROR_PREFIX: &str = "⚠️ Connected but Error: ";
pub const SETTING_SET: &str = "✅ Set";
pub const SETTING_NOT_SET: &str = "❌ Not Set";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";

/// Body of GET /test. Every key is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticsResponse {
    /// Report for a store that is not connected
    pub fn disconnected(database: &DatabaseConfig) -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DATABASE_NOT_AVAILABLE.to_string(),
            database_url: setting(database.url().is_some()),
            database_name: setting(database.name().is_some()),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

fn setting(is_set: bool) -> String {
    let label = if is_set { SETTING_SET } else { SETTING_NOT_SET };
    label.to_string()
}
