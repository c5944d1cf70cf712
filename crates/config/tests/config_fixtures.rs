//! Integration tests for loading config fixtures and env overrides.

use restkit_config::{
    CliEnv, EnvParseError, OutputMode, load_cli_config_from_path, parse_cli_config_json,
};
use restkit_domain::Locale;
use restkit_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

fn read_env_map(relative: &str) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
    let contents = fs::read_to_string(fixture_path(relative))?;
    Ok(serde_json::from_str(&contents)?)
}

#[test]
fn toml_fixture_loads_without_env() -> Result<(), Box<dyn Error>> {
    let path = fixture_path("restkit.valid.toml");
    let config = load_cli_config_from_path(Some(&path), &CliEnv::default())?;

    assert_eq!(config.output, OutputMode::Json);
    assert_eq!(config.locale, Locale::Chinese);
    assert!(config.lenient);
    assert_eq!(config.log.filter, "restkit=debug");
    Ok(())
}

#[test]
fn json_fixture_fills_defaults() -> Result<(), Box<dyn Error>> {
    let contents = fs::read_to_string(fixture_path("restkit.valid.json"))?;
    let config = parse_cli_config_json(&contents)?;

    assert_eq!(config.output, OutputMode::Text);
    assert_eq!(config.locale, Locale::English);
    assert!(!config.lenient);
    assert_eq!(config.log.filter, "info");
    Ok(())
}

#[test]
fn env_fixture_overrides_file() -> Result<(), Box<dyn Error>> {
    let env = CliEnv::from_map(&read_env_map("env.valid.json")?)?;
    let path = fixture_path("restkit.valid.toml");
    let config = load_cli_config_from_path(Some(&path), &env)?;

    assert_eq!(config.output, OutputMode::Text);
    assert_eq!(config.locale, Locale::Chinese, "file value survives");
    assert!(!config.lenient);
    assert_eq!(config.log.filter, "restkit_cli=trace");
    Ok(())
}

#[test]
fn invalid_env_fixture_is_rejected() -> Result<(), Box<dyn Error>> {
    let error = CliEnv::from_map(&read_env_map("env.invalid.json")?).err();
    assert!(matches!(error, Some(EnvParseError::InvalidBool { .. })));

    let envelope: ErrorEnvelope = error
        .ok_or_else(|| std::io::Error::other("expected invalid env error"))?
        .into();
    assert_eq!(envelope.code, ErrorCode::new("config", "invalid_env_bool"));
    Ok(())
}

#[test]
fn invalid_toml_fixture_reports_error_code() -> Result<(), Box<dyn Error>> {
    let path = fixture_path("restkit.invalid.toml");
    let error = load_cli_config_from_path(Some(&path), &CliEnv::default())
        .err()
        .ok_or_else(|| std::io::Error::other("expected invalid fixture error"))?;

    assert_eq!(error.code, ErrorCode::new("config", "invalid_toml"));
    assert_eq!(
        error.metadata.get("source").map(String::as_str),
        Some("config")
    );
    Ok(())
}
