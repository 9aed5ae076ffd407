//! Configuration management for the Berry catalog console

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Book file read at startup and by the load command.
    pub load_path: String,
    /// Book file written by the save command.
    pub save_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Diagnostic log file; stdout is the interactive console, so
    /// tracing output only goes to a file when one is configured.
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Operator session log appended to at every start.
    pub log_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BERRY_)
            .add_source(
                Environment::with_prefix("BERRY")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override the book file from BERRY_BOOKS_FILE if present
            .set_override_option(
                "files.load_path",
                env::var("BERRY_BOOKS_FILE").ok(),
            )?
            // Override the save target from BERRY_BOOKS_OUT if present
            .set_override_option(
                "files.save_path",
                env::var("BERRY_BOOKS_OUT").ok(),
            )?
            // Override the session log from BERRY_SESSION_LOG if present
            .set_override_option(
                "session.log_path",
                env::var("BERRY_SESSION_LOG").ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            load_path: "books.json".to_string(),
            save_path: "books.out.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_path: "user_log.txt".to_string(),
        }
    }
}
