//! CLI configuration schema.
//!
//! The file format is a small TOML (or JSON) document:
//!
//! ```toml
//! output = "json"
//! locale = "en"
//! lenient = false
//!
//! [log]
//! filter = "restkit=debug"
//! ```

use restkit_domain::Locale;
use restkit_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Log filter used when neither config nor env sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Output rendering for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

impl OutputMode {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

/// Raw CLI configuration as read from file and env.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CliConfig {
    /// Default output mode.
    pub output: OutputMode,
    /// Default display locale.
    pub locale: Locale,
    /// Map unknown labels to `Invalid` instead of failing.
    pub lenient: bool,
    /// Logging settings.
    pub log: LogConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Text,
            locale: Locale::English,
            lenient: false,
            log: LogConfig::default(),
        }
    }
}

impl CliConfig {
    /// Trim and validate the config.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedCliConfig, ConfigSchemaError> {
        let filter = self.log.filter.trim();
        if filter.is_empty() {
            return Err(ConfigSchemaError::EmptyLogFilter);
        }
        self.log.filter = filter.to_owned();
        Ok(ValidatedCliConfig { raw: self })
    }
}

/// Config that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCliConfig {
    raw: CliConfig,
}

impl ValidatedCliConfig {
    /// Take the validated values.
    #[must_use]
    pub fn into_inner(self) -> CliConfig {
        self.raw
    }
}

impl std::ops::Deref for ValidatedCliConfig {
    type Target = CliConfig;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

/// Config validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSchemaError {
    /// `log.filter` was empty after trimming.
    EmptyLogFilter,
}

impl ConfigSchemaError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyLogFilter => ErrorCode::new("config", "invalid_log_filter"),
        }
    }
}

impl fmt::Display for ConfigSchemaError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLogFilter => formatter.write_str("log.filter must be non-empty"),
        }
    }
}

impl std::error::Error for ConfigSchemaError {}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let code = error.error_code();
        let envelope = Self::expected(code, error.to_string());
        match error {
            ConfigSchemaError::EmptyLogFilter => envelope
                .with_metadata("section", "log")
                .with_metadata("field", "filter"),
        }
    }
}

/// Parse and validate a JSON config document.
pub fn parse_cli_config_json(input: &str) -> Result<ValidatedCliConfig, ErrorEnvelope> {
    let config: CliConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
        .with_metadata("source", "config")
    })?;
    config.validate_and_normalize().map_err(Into::into)
}

/// Parse and validate a TOML config document.
pub fn parse_cli_config_toml(input: &str) -> Result<ValidatedCliConfig, ErrorEnvelope> {
    let config: CliConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
        .with_metadata("source", "config")
    })?;
    config.validate_and_normalize().map_err(Into::into)
}
