use crate::{
    ConfigError, ConfigErrorResult, CorsConfig, DEFAULT_CONFIG_DIRECTORY, DatabaseConfig,
    LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for DA_CONFIG_DIR env var, else use ./.agency/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply plain deployment variables (PORT, DATABASE_URL, DATABASE_NAME)
    /// 4. Apply DA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: DA_CONFIG_DIR env var > ./.agency/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("DA_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file() {
            Some(filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs the connection string, it may hold credentials).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: url={}, name={}",
            if self.database.url().is_some() {
                "set"
            } else {
                "not set"
            },
            self.database.name().unwrap_or("not set")
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file().unwrap_or("stdout")
        );
        if self.cors.allows_any_origin() {
            info!("  cors: any origin");
        } else {
            info!("  cors: {}", self.cors.allowed_origins.join(", "));
        }
    }

    fn apply_env_overrides(&mut self) {
        // Plain deployment variables first so DA_* can take precedence
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_option_string("DATABASE_URL", &mut self.database.url);
        Self::apply_env_option_string("DATABASE_NAME", &mut self.database.name);

        // Server
        Self::apply_env_string("DA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DA_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_option_string("DA_DATABASE_URL", &mut self.database.url);
        Self::apply_env_option_string("DA_DATABASE_NAME", &mut self.database.name);

        // Logging
        Self::apply_env_parse("DA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DA_LOG_FILE", &mut self.logging.file);

        // CORS
        if let Ok(val) = std::env::var("DA_CORS_ORIGINS") {
            self.cors.allowed_origins = CorsConfig::parse_origins(&val);
        }
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
