//! Config command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, render_json};
use restkit_config::{CliConfig, to_pretty_toml};
use std::path::Path;

/// Print the effective config (defaults, file, then env).
pub fn run_config_show(
    mode: OutputMode,
    config: &CliConfig,
    path: Option<&Path>,
) -> Result<CliOutput, CliError> {
    let stdout = if mode.is_json() {
        render_json(&serde_json::json!({
            "status": "ok",
            "configPath": path.map(|value| value.to_string_lossy().to_string()),
            "effectiveConfig": config,
        }))?
    } else {
        to_pretty_toml(config)?
    };

    Ok(CliOutput { stdout })
}
