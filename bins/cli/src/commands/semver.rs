//! Semver command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, render_json};
use restkit_domain::SemVer;
use std::cmp::Ordering;

/// Compare two client versions.
pub fn run_semver_compare(mode: OutputMode, left: &str, right: &str) -> Result<CliOutput, CliError> {
    let left = SemVer::parse(left);
    let right = SemVer::parse(right);
    let (ordering, symbol) = match left.cmp(&right) {
        Ordering::Less => ("less", "<"),
        Ordering::Equal => ("equal", "="),
        Ordering::Greater => ("greater", ">"),
    };

    let stdout = if mode.is_json() {
        render_json(&serde_json::json!({
            "status": "ok",
            "left": left,
            "right": right,
            "ordering": ordering,
        }))?
    } else {
        format!("{left} {symbol} {right}\n")
    };

    Ok(CliOutput { stdout })
}
