//! # restkit-config
//!
//! Configuration schema, env overrides, and loading for the `restkit` CLI.
//! This crate depends on `domain` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (file + env).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{CliEnv, EnvParseError, apply_env_overrides};
pub use load::{load_cli_config_from_path, load_cli_config_std_env, to_pretty_toml};
pub use schema::{
    CliConfig, ConfigSchemaError, DEFAULT_LOG_FILTER, LogConfig, OutputMode,
    ValidatedCliConfig, parse_cli_config_json, parse_cli_config_toml,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use restkit_domain::domain_crate_version;
    use restkit_shared::shared_crate_version;

    #[test]
    fn config_crate_compiles() {
        let version = config_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn config_can_use_domain_and_shared() {
        assert!(!domain_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }
}
