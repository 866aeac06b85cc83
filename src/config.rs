/// Configuration for the suitability dashboard.
///
/// Settings load from an optional TOML file. The path comes from the
/// LOCMON_CONFIG environment variable (a `.env` file is honored), falling
/// back to `locmon.toml` in the working directory. A missing file is not
/// an error: every setting has a default, and LOCMON_LOG_FILE overrides
/// the configured log file either way.

use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::logging::LogLevel;

// ---------------------------------------------------------------------------
// Config structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub assessment: AssessmentConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Optional log file path. Console output is always on.
    pub file: Option<String>,
    /// Whether console lines carry timestamps.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    /// Maps the configured level string onto a `LogLevel`. Unknown values
    /// fall back to Info rather than failing startup.
    pub fn log_level(&self) -> LogLevel {
        match self.level.to_ascii_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Stage assessed when the command line does not name one.
    pub default_stage: Option<String>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads configuration from disk and the environment.
pub fn load() -> Result<Config, Box<dyn Error>> {
    dotenv::dotenv().ok();
    let path = env::var("LOCMON_CONFIG").unwrap_or_else(|_| "locmon.toml".to_string());
    let mut config = load_file(&path)?;
    if let Ok(file) = env::var("LOCMON_LOG_FILE") {
        config.logging.file = Some(file);
    }
    Ok(config)
}

fn load_file(path: &str) -> Result<Config, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path)?;
    let config = toml::from_str(&text)?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
