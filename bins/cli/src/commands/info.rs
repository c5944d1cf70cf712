//! Info command handler.

use crate::CliOutput;
use crate::commands::EnumKind;
use crate::error::CliError;
use crate::format::{OutputMode, render_json};
use clap::ValueEnum;
use restkit_config::config_crate_version;
use restkit_domain::{domain_crate_version, shared_crate_version};

/// Run the info command.
pub fn run_info(mode: OutputMode) -> Result<CliOutput, CliError> {
    let kinds: Vec<&str> = EnumKind::value_variants()
        .iter()
        .map(|kind| kind.type_name())
        .collect();

    let stdout = if mode.is_json() {
        render_json(&serde_json::json!({
            "status": "ok",
            "build": {
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "domainVersion": domain_crate_version(),
                "configVersion": config_crate_version(),
                "sharedVersion": shared_crate_version(),
            },
            "enums": kinds,
        }))?
    } else {
        format!(
            "status: ok\nname: {}\nversion: {}\ndomain: {}\nconfig: {}\nshared: {}\nenums: {}\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            domain_crate_version(),
            config_crate_version(),
            shared_crate_version(),
            kinds.join(", "),
        )
    };

    Ok(CliOutput { stdout })
}
