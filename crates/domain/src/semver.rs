//! Three-field client version numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` version as sent by app clients.
///
/// Parsing never fails: missing or non-numeric fields read as `0`, so
/// `"5"` is `5.0.0` and `"1.x.3"` is `1.0.3`. Fields are signed, so
/// `"-1.2.3"` keeps its negative major and sorts below every `0.x` version.
/// Ordering compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SemVer {
    /// Major version.
    pub major: i64,
    /// Minor version.
    pub minor: i64,
    /// Patch version.
    pub patch: i64,
}

impl SemVer {
    /// Create a version from its fields.
    pub const fn new(major: i64, minor: i64, patch: i64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version string leniently.
    pub fn parse(input: &str) -> Self {
        let mut fields = input
            .split('.')
            .map(|field| field.parse::<i64>().unwrap_or(0));
        Self {
            major: fields.next().unwrap_or(0),
            minor: fields.next().unwrap_or(0),
            patch: fields.next().unwrap_or(0),
        }
    }
}

impl FromStr for SemVer {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(input))
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for SemVer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemVer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
