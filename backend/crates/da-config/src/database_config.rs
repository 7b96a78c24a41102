use crate::{ConfigError, ConfigErrorResult, MONGODB_SCHEMES};

use serde::Deserialize;

/// Document database connection settings.
///
/// Both fields are optional: a server without a database still starts and
/// serves the built-in portfolio.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// MongoDB connection string
    pub url: Option<String>,
    /// Database name within the cluster
    pub name: Option<String>,
}

impl DatabaseConfig {
    /// Connection string, treating an empty value as unset
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Database name, treating an empty value as unset
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// True when both the connection string and the database name are set
    #[cfg(test)]
    pub fn is_configured(&self) -> bool {
        self.url().is_some() && self.name().is_some()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = self.url()
            && !MONGODB_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
        {
            return Err(ConfigError::database(format!(
                "database.url must start with one of {:?}",
                MONGODB_SCHEMES
            )));
        }

        Ok(())
    }
}
