//! Configuration management for the login form
//!
//! Loads an optional `config.toml` with `LOGIN_FORM_*` environment overrides.
//! Every key has a default, so neither source is required.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_USERS_FILE: &str = "users.txt";
pub const DEFAULT_TITLE: &str = "Login Form";
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 512;

/// Complete form configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormConfig {
    /// Backing file for credentials, relative to the working directory
    /// Environment: LOGIN_FORM_USERS_FILE
    pub users_file: String,

    /// Banner printed when the form opens
    pub title: String,

    /// Longest accepted input line
    pub max_input_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            users_file: DEFAULT_USERS_FILE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }
}

impl FormConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the named file (extension optional)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("users_file", DEFAULT_USERS_FILE)?
            .set_default("title", DEFAULT_TITLE)?
            .set_default("max_input_length", DEFAULT_MAX_INPUT_LENGTH as i64)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("LOGIN_FORM"))
            .build()?;

        let config: FormConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.users_file.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "users_file cannot be empty".into(),
            ));
        }

        if self.title.trim().is_empty() {
            return Err(config::ConfigError::Message("title cannot be empty".into()));
        }

        if self.max_input_length == 0 {
            return Err(config::ConfigError::Message(
                "max_input_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get users file as PathBuf
    pub fn users_file_path(&self) -> PathBuf {
        PathBuf::from(&self.users_file)
    }
}
