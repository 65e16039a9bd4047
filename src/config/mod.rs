//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SKRIPTOLOG` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use skriptolog::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Summaries go to {}", config.storage.summary_path.display());
//! ```

mod credentials;
mod dialog;
mod error;
mod logging;
mod storage;

pub use credentials::CredentialsConfig;
pub use dialog::{DialogConfig, MAX_DIGEST_TURNS, MIN_DIGEST_TURNS};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SKRIPTOLOG";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Transport credentials (required)
    pub credentials: CredentialsConfig,

    /// Summary log location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Dialog defaults (tone, digest size)
    #[serde(default)]
    pub dialog: DialogConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SKRIPTOLOG` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SKRIPTOLOG__CREDENTIALS__BOT_TOKEN=...` -> `credentials.bot_token = ...`
    /// - `SKRIPTOLOG__DIALOG__DIGEST_TURNS=5` -> `dialog.digest_turns = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.credentials.validate()?;
        self.storage.validate()?;
        self.dialog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::script::Tone;
    use secrecy::ExposeSecret;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("SKRIPTOLOG__CREDENTIALS__BOT_TOKEN", "123456:test-token");
    }

    fn clear_env() {
        env::remove_var("SKRIPTOLOG__CREDENTIALS__BOT_TOKEN");
        env::remove_var("SKRIPTOLOG__STORAGE__SUMMARY_PATH");
        env::remove_var("SKRIPTOLOG__DIALOG__DEFAULT_TONE");
        env::remove_var("SKRIPTOLOG__DIALOG__DIGEST_TURNS");
        env::remove_var("SKRIPTOLOG__LOGGING__FILTER");
        env::remove_var("SKRIPTOLOG__LOGGING__JSON");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.credentials.bot_token.expose_secret(), "123456:test-token");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.summary_path, PathBuf::from("skriptolog_notes.jsonl"));
        assert_eq!(config.dialog.default_tone, Tone::Confident);
        assert_eq!(config.dialog.digest_turns, 5);
        assert_eq!(config.logging.filter, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("SKRIPTOLOG__DIALOG__DEFAULT_TONE", "expert");
        env::set_var("SKRIPTOLOG__DIALOG__DIGEST_TURNS", "3");
        env::set_var("SKRIPTOLOG__STORAGE__SUMMARY_PATH", "/tmp/notes.jsonl");
        env::set_var("SKRIPTOLOG__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.dialog.default_tone, Tone::Expert);
        assert_eq!(config.dialog.digest_turns, 3);
        assert_eq!(config.storage.summary_path, PathBuf::from("/tmp/notes.jsonl"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_missing_token_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_empty_token_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SKRIPTOLOG__CREDENTIALS__BOT_TOKEN", "");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("BOT_TOKEN"))
        ));
    }
}
