//! Output format helpers for CLI commands.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use restkit_config::OutputMode as ConfiguredOutput;
use serde::Serialize;

/// Output format choices for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text output.
    Text,
    /// Machine-friendly JSON output.
    Json,
}

/// Output-related CLI flags.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format for command responses (defaults to the configured mode).
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Output mode derived from CLI flags and config.
#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub format: OutputFormat,
}

impl OutputMode {
    /// Flag wins over the configured default.
    #[must_use]
    pub const fn resolve(args: &OutputArgs, configured: ConfiguredOutput) -> Self {
        let format = match (args.output, configured) {
            (Some(value), _) => value,
            (None, ConfiguredOutput::Json) => OutputFormat::Json,
            (None, ConfiguredOutput::Text) => OutputFormat::Text,
        };
        Self { format }
    }

    /// Returns true when JSON output is requested.
    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }
}

/// Pretty JSON with a trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_configured_mode() {
        let args = OutputArgs {
            output: Some(OutputFormat::Text),
        };
        assert!(!OutputMode::resolve(&args, ConfiguredOutput::Json).is_json());

        let args = OutputArgs { output: None };
        assert!(OutputMode::resolve(&args, ConfiguredOutput::Json).is_json());
        assert!(!OutputMode::resolve(&args, ConfiguredOutput::Text).is_json());
    }
}
