//! SQL `DATE` / `DATETIME` strings.
//!
//! MySQL returns these columns as text without zone information and uses an
//! all-zero value for "no date". Wall-clock fields are interpreted in a
//! caller-provided fixed offset, usually [`shanghai`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use restkit_shared::{ErrorCode, ErrorEnvelope};

/// Layout of a SQL `DATE` string.
pub const SQL_DATE_FORMAT: &str = "%Y-%m-%d";
/// Layout of a SQL `DATETIME` string.
pub const SQL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SQL_DATE_LEN: usize = 10;
const SQL_DATETIME_LEN: usize = 19;
const ZERO_DATE: &str = "0000-00-00";
const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

const SHANGHAI_OFFSET_SECS: i32 = 8 * 3600;

/// Errors from parsing SQL date strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// Input is neither a `DATE` nor a `DATETIME` string.
    #[error("invalid time string {input:?}: expected 10 or 19 characters")]
    InvalidLength {
        /// Raw input.
        input: String,
    },
    /// Input has the right length but does not parse.
    #[error("invalid time string {input:?}: {reason}")]
    Unparsable {
        /// Raw input.
        input: String,
        /// Parser message.
        reason: String,
    },
}

impl From<DateTimeError> for ErrorEnvelope {
    fn from(error: DateTimeError) -> Self {
        let (code, input) = match &error {
            DateTimeError::InvalidLength { input } => ("invalid_length", input.clone()),
            DateTimeError::Unparsable { input, .. } => ("unparsable", input.clone()),
        };
        Self::expected(ErrorCode::new("datetime", code), error.to_string())
            .with_metadata("input", input)
    }
}

/// The `UTC+8` offset used for stored wall-clock times.
pub fn shanghai() -> FixedOffset {
    FixedOffset::east_opt(SHANGHAI_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse a SQL `DATE` or `DATETIME` string in `offset`.
///
/// Returns `Ok(None)` for the zero date.
pub fn parse_sql_datetime(
    input: &str,
    offset: FixedOffset,
) -> Result<Option<DateTime<FixedOffset>>, DateTimeError> {
    let naive = match input.len() {
        SQL_DATE_LEN => {
            if input == ZERO_DATE {
                return Ok(None);
            }
            NaiveDate::parse_from_str(input, SQL_DATE_FORMAT)
                .map_err(|error| unparsable(input, &error))?
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| DateTimeError::Unparsable {
                    input: input.to_owned(),
                    reason: "midnight out of range".to_owned(),
                })?
        },
        SQL_DATETIME_LEN => {
            if input == ZERO_DATETIME {
                return Ok(None);
            }
            NaiveDateTime::parse_from_str(input, SQL_DATETIME_FORMAT)
                .map_err(|error| unparsable(input, &error))?
        },
        _ => {
            return Err(DateTimeError::InvalidLength {
                input: input.to_owned(),
            });
        },
    };

    offset
        .from_local_datetime(&naive)
        .single()
        .map(Some)
        .ok_or_else(|| DateTimeError::Unparsable {
            input: input.to_owned(),
            reason: "not representable in offset".to_owned(),
        })
}

fn unparsable(input: &str, error: &chrono::ParseError) -> DateTimeError {
    DateTimeError::Unparsable {
        input: input.to_owned(),
        reason: error.to_string(),
    }
}
