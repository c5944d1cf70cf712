//! # restkit-domain
//!
//! Closed enumerations and request value types for a subscription backend.
//!
//! - **Codec** - [`ClosedEnum`], the table-driven parse/label/JSON/SQL codec
//! - **Enums** - `Cycle`, `Tier`, `PayMethod`, `SubsStatus`, ...
//! - **Values** - [`SemVer`], [`StringSlice`], [`ClientApp`], SQL date parsing
//!
//! ## Decoding policy
//!
//! Decoders are strict: unknown labels fail with
//! [`EnumError::UnrecognizedLabel`]. The `*_lenient` variants and
//! [`codec::lenient`] map them to the `Invalid` sentinel instead.
//!
//! ## Features
//!
//! - `mysql` (default) - sqlx `Type`/`Encode`/`Decode` for MySQL text columns

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

// Re-export shared types for convenience
pub use restkit_shared::shared_crate_version;

// =============================================================================
// DOMAIN MODULES
// =============================================================================

mod macros;

pub mod client_app;
pub mod codec;
pub mod datetime;
pub mod enums;
pub mod semver;
#[cfg(feature = "mysql")]
pub mod sql;
pub mod string_slice;

pub use client_app::{ClientApp, HeaderSource};
pub use codec::{ClosedEnum, EnumError, EnumTable, Locale, SENTINEL_ORDINAL, SqlScalar};
pub use datetime::{DateTimeError, parse_sql_datetime, shanghai};
pub use enums::{
    AccountKind, Cycle, Environment, Gender, LoginMethod, OrderKind, PayMethod, Platform,
    SnapshotReason, SubsSource, SubsStatus, Tier,
};
pub use semver::SemVer;
pub use string_slice::{StringSlice, StringSliceError};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
