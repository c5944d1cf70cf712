//! Config loading helpers (file + env).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::{
    CliConfig, CliEnv, ValidatedCliConfig, apply_env_overrides, parse_cli_config_json,
    parse_cli_config_toml,
};
use restkit_shared::{ErrorClass, ErrorCode, ErrorEnvelope, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

/// Load the CLI config from an optional file path.
///
/// Precedence (highest wins):
/// - env overrides (`CliEnv`)
/// - config file (TOML, or JSON by extension)
/// - defaults (`CliConfig::default()`)
pub fn load_cli_config_from_path(
    config_path: Option<&Path>,
    env: &CliEnv,
) -> Result<ValidatedCliConfig> {
    let config = match config_path {
        None => CliConfig::default(),
        Some(path) => {
            let format = detect_config_format(path)?;
            let config_text = read_config_file(path)?;
            tracing::debug!(path = %path.display(), ?format, "loading config file");
            let parsed = match format {
                ConfigFormat::Json => parse_cli_config_json(&config_text)?,
                ConfigFormat::Toml => parse_cli_config_toml(&config_text)?,
            };
            parsed.into_inner()
        },
    };

    // env is applied last and also validates/normalizes the resulting config.
    apply_env_overrides(config, env)
}

/// Load the CLI config from std env and an optional file path.
pub fn load_cli_config_std_env(
    config_path: Option<&Path>,
) -> Result<ValidatedCliConfig> {
    let env = CliEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_cli_config_from_path(config_path, &env)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &CliConfig) -> Result<String> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
            ErrorClass::NonRetriable,
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("toml") => Ok(ConfigFormat::Toml),
        Some("json") => Ok(ConfigFormat::Json),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .toml or .json",
        )
        .with_metadata("extension", other.to_string())),
    }
}
