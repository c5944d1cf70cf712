//! CLI command handlers.

pub mod config;
pub mod enums;
pub mod info;
pub mod semver;

pub use config::run_config_show;
pub use enums::{
    EnumKind, LocaleArg, run_enums_decode_json, run_enums_display, run_enums_list, run_enums_parse,
};
pub use info::run_info;
pub use semver::run_semver_compare;
