use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL,
    LogLevel,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for log files, relative to the config directory
    pub dir: String,
    /// Log file name; stdout when unset
    pub file: Option<String>,
    /// Colored level names on stdout (ignored for file output)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}

impl LoggingConfig {
    /// Log file name, treating an empty value as unset
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        if let Some(file) = self.file()
            && (file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a plain file name",
            ));
        }

        Ok(())
    }
}
