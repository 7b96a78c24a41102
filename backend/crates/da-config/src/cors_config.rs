use serde::Deserialize;

/// Cross-origin settings for the browser frontend.
///
/// An empty origin list allows any origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Parse a comma-separated origin list, dropping blanks
    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}
