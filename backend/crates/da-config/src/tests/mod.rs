
use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads, cleared before each test
const CONFIG_ENV_VARS: [&str; 12] = [
    "PORT",
    "DATABASE_URL",
    "DATABASE_NAME",
    "DA_SERVER_HOST",
    "DA_SERVER_PORT",
    "DA_DATABASE_URL",
    "DA_DATABASE_NAME",
    "DA_LOG_LEVEL",
    "DA_LOG_COLORED",
    "DA_LOG_FILE",
    "DA_CORS_ORIGINS",
    "DA_CONFIG_DIR",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Isolated config environment: temp dir as DA_CONFIG_DIR, all other config vars cleared
pub(crate) struct ConfigEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

impl ConfigEnv {
    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::write(self.dir.path().join("config.toml"), contents).unwrap();
    }
}

/// Create a temp config directory and set DA_CONFIG_DIR
pub(crate) fn setup_config_dir() -> ConfigEnv {
    let mut guards: Vec<EnvGuard> = CONFIG_ENV_VARS
        .iter()
        .map(|&key| EnvGuard::remove(key))
        .collect();

    let dir = TempDir::new().unwrap();
    guards.push(EnvGuard::set("DA_CONFIG_DIR", dir.path().to_str().unwrap()));

    ConfigEnv {
        dir,
        _guards: guards,
    }
}
