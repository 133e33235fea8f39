//! Configuration for the shavian crate.

use std::path::PathBuf;

use serde::Deserialize;

use crate::dictionary::ParseMode;
use crate::errors::ConfigError;

/// Top-level configuration for shavian.
#[derive(Debug, Clone, Deserialize)]
pub struct ShavianConfig {
  /// [dictionary] section
  pub dictionary: DictionaryConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
  /// Path to the ISLE dictionary source file.
  pub path: PathBuf,
  /// Malformed-line policy: "lenient" (default) or "strict".
  #[serde(default)]
  pub parse_mode: ParseMode,
}

/// [logging] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
  /// Log level filter: trace | debug | info | warn | error.
  #[serde(default = "default_log_level")]
  pub level: String,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

fn default_log_level() -> String {
  "info".to_string()
}

/// Accepted logging levels, matching what `tracing_subscriber::EnvFilter`
/// understands as bare directives.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl ShavianConfig {
  /// Deserializes a configuration from a JSON document.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    let config: Self =
      serde_json::from_str(json).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
    config.validate()?;
    Ok(config)
  }

  /// Validates cross-field invariants that serde cannot express.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.dictionary.path.as_os_str().is_empty() {
      return Err(ConfigError::EmptyDictionaryPath);
    }
    if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
      return Err(ConfigError::InvalidLogLevel {
        actual: self.logging.level.clone(),
      });
    }
    Ok(())
  }
}
