//! CLI binary entrypoint.

mod commands;
mod error;
mod format;

use clap::{Parser, Subcommand};
use commands::{
    EnumKind, LocaleArg, run_config_show, run_enums_decode_json, run_enums_display,
    run_enums_list, run_enums_parse, run_info, run_semver_compare,
};
use error::CliError;
use format::{OutputArgs, OutputMode, render_json};
use restkit_config::{CliConfig, DEFAULT_LOG_FILTER, load_cli_config_std_env};
use restkit_domain::Locale;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Parser)]
#[command(
    name = "restkit",
    version,
    about = "Inspect the closed enumeration codecs shared by the subscription services",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    /// Config file (TOML or JSON). Env overrides still apply.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show build and version details.
    Info,
    /// Enumeration codec commands.
    Enums {
        #[command(subcommand)]
        command: EnumsCommands,
    },
    /// Client version commands.
    Semver {
        #[command(subcommand)]
        command: SemverCommands,
    },
    /// Config-related commands.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
enum EnumsCommands {
    /// List the labels of one enumeration, or of all of them.
    List {
        /// Enumeration to describe in detail.
        kind: Option<EnumKind>,
    },
    /// Parse a label.
    Parse {
        kind: EnumKind,
        label: String,
        /// Map unknown labels to the invalid value instead of failing.
        #[arg(long)]
        lenient: bool,
    },
    /// Decode a JSON document such as `"month"` or `null`.
    DecodeJson {
        kind: EnumKind,
        json: String,
        /// Map unknown labels to the invalid value instead of failing.
        #[arg(long)]
        lenient: bool,
    },
    /// Print the localized display string for a label.
    Display {
        kind: EnumKind,
        label: String,
        /// Display locale (defaults to the configured locale).
        #[arg(long, value_enum)]
        locale: Option<LocaleArg>,
        /// Map unknown labels to the invalid value instead of failing.
        #[arg(long)]
        lenient: bool,
    },
}

#[derive(Debug, Subcommand)]
enum SemverCommands {
    /// Compare two client versions.
    Compare { left: String, right: String },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the effective config.
    Show,
}

pub(crate) struct CliOutput {
    stdout: String,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let config = match load_cli_config_std_env(cli.config.as_deref()) {
        Ok(config) => config.into_inner(),
        Err(envelope) => {
            let mode = OutputMode::resolve(&cli.output, CliConfig::default().output);
            return exit_with_error(mode, &CliError::from(envelope));
        },
    };

    init_tracing(&config);
    let mode = OutputMode::resolve(&cli.output, config.output);

    match run(&cli, &config, mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(error) => exit_with_error(mode, &error),
        },
        Err(error) => exit_with_error(mode, &error),
    }
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_new(&config.log.filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .try_init();
}

fn exit_with_error(mode: OutputMode, error: &CliError) -> std::process::ExitCode {
    if mode.is_json() {
        if let Ok(payload) = format_error_json(error) {
            let _ = io::stdout().write_all(payload.as_bytes());
        }
    }
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn format_error_json(error: &CliError) -> Result<String, CliError> {
    render_json(&serde_json::json!({
        "status": "error",
        "error": error.to_envelope(),
    }))
}

fn run(cli: &Cli, config: &CliConfig, mode: OutputMode) -> Result<CliOutput, CliError> {
    match &cli.command {
        Commands::Info => run_info(mode),
        Commands::Enums { command } => run_enums(command, config, mode),
        Commands::Semver { command } => match command {
            SemverCommands::Compare { left, right } => run_semver_compare(mode, left, right),
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => run_config_show(mode, config, cli.config.as_deref()),
        },
    }
}

fn run_enums(
    command: &EnumsCommands,
    config: &CliConfig,
    mode: OutputMode,
) -> Result<CliOutput, CliError> {
    match command {
        EnumsCommands::List { kind } => run_enums_list(mode, *kind),
        EnumsCommands::Parse {
            kind,
            label,
            lenient,
        } => run_enums_parse(mode, *kind, label, *lenient || config.lenient),
        EnumsCommands::DecodeJson {
            kind,
            json,
            lenient,
        } => run_enums_decode_json(mode, *kind, json, *lenient || config.lenient),
        EnumsCommands::Display {
            kind,
            label,
            locale,
            lenient,
        } => {
            let locale = locale.map_or(config.locale, Locale::from);
            run_enums_display(mode, *kind, label, *lenient || config.lenient, locale)
        },
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
