//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is present but empty or invalid
//! fails the whole load instead of being ignored.

use crate::schema::{CliConfig, OutputMode, ValidatedCliConfig};
use restkit_domain::Locale;
use restkit_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: output mode (`text` | `json`).
pub const ENV_OUTPUT: &str = "RESTKIT_OUTPUT";
/// Env var: display locale (`cn` | `en`).
pub const ENV_LOCALE: &str = "RESTKIT_LOCALE";
/// Env var: lenient decoding (true/false).
pub const ENV_LENIENT: &str = "RESTKIT_LENIENT";
/// Env var: log filter directives.
pub const ENV_LOG: &str = "RESTKIT_LOG";

const ALL_VARS: [&str; 4] = [ENV_OUTPUT, ENV_LOCALE, ENV_LENIENT, ENV_LOG];

/// Env overrides for the CLI config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliEnv {
    /// Override for `output`.
    pub output: Option<OutputMode>,
    /// Override for `locale`.
    pub locale: Option<Locale>,
    /// Override for `lenient`.
    pub lenient: Option<bool>,
    /// Override for `log.filter`.
    pub log_filter: Option<Box<str>>,
}

impl CliEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            output: parse_optional_output(map, ENV_OUTPUT)?,
            locale: parse_optional_locale(map, ENV_LOCALE)?,
            lenient: parse_optional_bool(map, ENV_LENIENT)?,
            log_filter: parse_optional_string(map, ENV_LOG)?,
        })
    }

    /// Parse env overrides from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in ALL_VARS {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_owned(), value);
            }
        }
        Self::from_map(&map)
    }
}

/// Apply env overrides on top of a base config and validate the result.
pub fn apply_env_overrides(
    base: CliConfig,
    env: &CliEnv,
) -> Result<ValidatedCliConfig, ErrorEnvelope> {
    let mut config = base;
    if let Some(output) = env.output {
        config.output = output;
    }
    if let Some(locale) = env.locale {
        config.locale = locale;
    }
    if let Some(lenient) = env.lenient {
        config.lenient = lenient;
    }
    if let Some(filter) = env.log_filter.as_deref() {
        filter.clone_into(&mut config.log.filter);
    }

    config.validate_and_normalize().map_err(Into::into)
}

/// Env parsing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Boolean env var had an invalid value.
    InvalidBool {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
    /// Enum env var had an invalid value.
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidBool { .. } => ErrorCode::new("config", "invalid_env_bool"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidBool { var, .. } => write!(formatter, "{var} must be a boolean"),
            Self::InvalidEnum { var, .. } => write!(formatter, "{var} has an unsupported value"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);

        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidBool { var, value } | EnvParseError::InvalidEnum { var, value } => {
                envelope
                    .with_metadata("env_var", var)
                    .with_metadata("value", value)
            },
        }
    }
}

fn non_empty<'a>(
    map: &'a BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<&'a str>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }
    Ok(Some(trimmed))
}

fn parse_optional_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Box<str>>, EnvParseError> {
    Ok(non_empty(map, var)?.map(Box::from))
}

fn parse_optional_bool(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<bool>, EnvParseError> {
    let Some(trimmed) = non_empty(map, var)? else {
        return Ok(None);
    };

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(EnvParseError::InvalidBool {
            var,
            value: trimmed.to_owned(),
        }),
    }
}

fn parse_optional_output(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<OutputMode>, EnvParseError> {
    let Some(trimmed) = non_empty(map, var)? else {
        return Ok(None);
    };

    match trimmed.to_ascii_lowercase().as_str() {
        "text" => Ok(Some(OutputMode::Text)),
        "json" => Ok(Some(OutputMode::Json)),
        _ => Err(EnvParseError::InvalidEnum {
            var,
            value: trimmed.to_owned(),
        }),
    }
}

fn parse_optional_locale(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Locale>, EnvParseError> {
    let Some(trimmed) = non_empty(map, var)? else {
        return Ok(None);
    };

    Locale::from_code(&trimmed.to_ascii_lowercase())
        .map(Some)
        .ok_or_else(|| EnvParseError::InvalidEnum {
            var,
            value: trimmed.to_owned(),
        })
}
