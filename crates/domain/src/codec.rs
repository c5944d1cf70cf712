//! Closed-enumeration codec.
//!
//! Every domain enumeration is a fixed table of `(value, label)` entries plus
//! an optional decode-only alias table and optional display translations.
//! [`ClosedEnum`] implements all conversions (text, JSON, SQL, display) once,
//! as default methods over that table; concrete types only declare data (see
//! the `closed_enum!` macro).
//!
//! Decoding is strict: an unknown label is reported as
//! [`EnumError::UnrecognizedLabel`]. Callers that prefer the historical
//! fallback behavior opt in through the `*_lenient` methods or the
//! [`lenient`] serde helper.

use restkit_shared::{ErrorCode, ErrorEnvelope};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Ordinal reserved for the absent/invalid value of every enumeration.
pub const SENTINEL_ORDINAL: i16 = -1;

/// Locales with display translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Simplified Chinese (`cn`).
    #[serde(rename = "cn")]
    Chinese,
    /// English (`en`).
    #[serde(rename = "en")]
    English,
}

impl Locale {
    /// Returns the short locale code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Chinese => "cn",
            Self::English => "en",
        }
    }

    /// Resolve a short locale code (`cn`, `en`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "cn" => Some(Self::Chinese),
            "en" => Some(Self::English),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// One labelled value of an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<T: 'static> {
    /// The enumeration value.
    pub value: T,
    /// Canonical label used for JSON and SQL.
    pub label: &'static str,
}

/// Compile-time value table backing a [`ClosedEnum`].
#[derive(Debug, Clone, Copy)]
pub struct EnumTable<T: 'static> {
    /// Type name used in diagnostics.
    pub name: &'static str,
    /// The sentinel value (never labelled).
    pub invalid: T,
    /// Labelled values in ordinal order.
    pub entries: &'static [Entry<T>],
    /// Extra labels accepted on decode only.
    pub aliases: &'static [(&'static str, T)],
    /// Chinese display strings.
    pub chinese: &'static [(T, &'static str)],
    /// English display strings.
    pub english: &'static [(T, &'static str)],
}

impl<T: Copy + PartialEq + 'static> EnumTable<T> {
    /// Resolve a label (canonical first, then aliases). Exact match only.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(alias, _)| *alias == label)
                    .map(|(_, value)| *value)
            })
    }

    /// Canonical label of a value, if it has one.
    #[must_use]
    pub fn label_of(&self, value: T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.label)
    }

    /// Translation of a value for a locale, if the table has one.
    #[must_use]
    pub fn translation(&self, value: T, locale: Locale) -> Option<&'static str> {
        let table = match locale {
            Locale::Chinese => self.chinese,
            Locale::English => self.english,
        };
        table
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map(|(_, text)| *text)
    }
}

/// Driver-agnostic SQL scalar handed to [`ClosedEnum::decode_sql`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqlScalar<'a> {
    /// SQL `NULL`.
    Null,
    /// Text column value.
    Text(&'a str),
    /// Raw bytes (MySQL drivers return text columns as bytes).
    Bytes(&'a [u8]),
    /// Integer column value.
    Int(i64),
    /// Floating-point column value.
    Float(f64),
    /// Boolean column value.
    Bool(bool),
}

impl SqlScalar<'_> {
    /// Short name of the scalar kind for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Text(_) => "TEXT",
            Self::Bytes(_) => "BLOB",
            Self::Int(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Bool(_) => "BOOLEAN",
        }
    }
}

/// Codec failures for closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
    /// The input did not match any label or alias of the type.
    #[error("{input:?} is not a valid {type_name}")]
    UnrecognizedLabel {
        /// Enumeration type name.
        type_name: &'static str,
        /// Raw input, unmodified.
        input: String,
    },
    /// The JSON payload was neither a string nor null.
    #[error("{type_name} must be a JSON string or null: {reason}")]
    MalformedJson {
        /// Enumeration type name.
        type_name: &'static str,
        /// What was found instead.
        reason: String,
    },
    /// The SQL scalar could not be interpreted as text or NULL.
    #[error("{type_name} cannot be scanned from SQL {found}")]
    IncompatibleSqlType {
        /// Enumeration type name.
        type_name: &'static str,
        /// The SQL type that was found.
        found: String,
    },
}

impl EnumError {
    /// Name of the enumeration that failed to decode.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::UnrecognizedLabel { type_name, .. }
            | Self::MalformedJson { type_name, .. }
            | Self::IncompatibleSqlType { type_name, .. } => type_name,
        }
    }

    /// Returns true when the input was well-formed but not a known label.
    #[must_use]
    pub const fn is_unrecognized_label(&self) -> bool {
        matches!(self, Self::UnrecognizedLabel { .. })
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnrecognizedLabel { .. } => ErrorCode::new("enum", "unrecognized_label"),
            Self::MalformedJson { .. } => ErrorCode::new("enum", "malformed_json"),
            Self::IncompatibleSqlType { .. } => ErrorCode::new("enum", "incompatible_sql_type"),
        }
    }

    /// Map a failure while decoding client input (a bad request field).
    #[must_use]
    pub fn into_request_error(self) -> ErrorEnvelope {
        let envelope = ErrorEnvelope::expected(self.error_code(), self.to_string());
        self.attach_metadata(envelope)
    }

    /// Map a failure while decoding persisted data (corrupt or newer rows).
    #[must_use]
    pub fn into_storage_error(self) -> ErrorEnvelope {
        let envelope = ErrorEnvelope::invariant(ErrorCode::new("enum", "stored_data"), self.to_string())
            .with_metadata("cause", self.error_code().code().to_owned());
        self.attach_metadata(envelope)
    }

    fn attach_metadata(self, envelope: ErrorEnvelope) -> ErrorEnvelope {
        match self {
            Self::UnrecognizedLabel { type_name, input } => envelope
                .with_metadata("type", type_name)
                .with_metadata("input", input),
            Self::MalformedJson { type_name, reason } => envelope
                .with_metadata("type", type_name)
                .with_metadata("reason", reason),
            Self::IncompatibleSqlType { type_name, found } => envelope
                .with_metadata("type", type_name)
                .with_metadata("found", found),
        }
    }
}

impl From<EnumError> for ErrorEnvelope {
    fn from(error: EnumError) -> Self {
        error.into_request_error()
    }
}

/// A closed enumeration backed by a compile-time [`EnumTable`].
///
/// All operations are pure lookups over `TABLE`; implementors only provide the
/// table and the ordinal. Use the `closed_enum!` macro rather than
/// implementing this by hand.
pub trait ClosedEnum: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// The value table.
    const TABLE: EnumTable<Self>;

    /// Integer identity of the value; [`SENTINEL_ORDINAL`] for the sentinel.
    fn ordinal(self) -> i16;

    /// Type name used in diagnostics.
    #[must_use]
    fn type_name() -> &'static str {
        Self::TABLE.name
    }

    /// The sentinel value.
    #[must_use]
    fn invalid() -> Self {
        Self::TABLE.invalid
    }

    /// Labelled values in ordinal order.
    fn values() -> impl Iterator<Item = Self> {
        Self::TABLE.entries.iter().map(|entry| entry.value)
    }

    /// Returns false only for the sentinel.
    #[must_use]
    fn is_valid(self) -> bool {
        self != Self::TABLE.invalid
    }

    /// Resolve an ordinal; `None` when no value carries it.
    #[must_use]
    fn from_ordinal(ordinal: i16) -> Option<Self> {
        if ordinal == SENTINEL_ORDINAL {
            return Some(Self::TABLE.invalid);
        }
        Self::values().find(|value| value.ordinal() == ordinal)
    }

    /// Parse a label. Case- and whitespace-sensitive.
    fn parse(label: &str) -> Result<Self, EnumError> {
        Self::TABLE
            .lookup(label)
            .ok_or_else(|| EnumError::UnrecognizedLabel {
                type_name: Self::TABLE.name,
                input: label.to_owned(),
            })
    }

    /// Parse a label, falling back to the sentinel on unknown input.
    #[must_use]
    fn parse_or_invalid(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|error| {
            tracing::debug!(
                enum_type = Self::TABLE.name,
                input = label,
                %error,
                "unrecognized label replaced by sentinel"
            );
            Self::TABLE.invalid
        })
    }

    /// Canonical label, `None` for the sentinel.
    #[must_use]
    fn canonical_label(self) -> Option<&'static str> {
        Self::TABLE.label_of(self)
    }

    /// Canonical label, empty for the sentinel.
    #[must_use]
    fn to_label(self) -> &'static str {
        self.canonical_label().unwrap_or("")
    }

    /// Localized display string, empty when untranslated.
    #[must_use]
    fn to_display(self, locale: Locale) -> &'static str {
        Self::TABLE.translation(self, locale).unwrap_or("")
    }

    /// Localized display string for a locale code, empty for unknown codes.
    #[must_use]
    fn to_display_code(self, code: &str) -> &'static str {
        Locale::from_code(code).map_or("", |locale| self.to_display(locale))
    }

    /// JSON text: the quoted label, or `null` for the sentinel.
    #[must_use]
    fn encode_json(self) -> String {
        self.canonical_label()
            .map_or_else(|| "null".to_owned(), |label| serde_json::Value::from(label).to_string())
    }

    /// Decode a JSON string or `null`.
    fn decode_json(bytes: &[u8]) -> Result<Self, EnumError> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|error| EnumError::MalformedJson {
                type_name: Self::TABLE.name,
                reason: error.to_string(),
            })?;

        match value {
            serde_json::Value::Null => Ok(Self::TABLE.invalid),
            serde_json::Value::String(label) => Self::parse(&label),
            other => Err(EnumError::MalformedJson {
                type_name: Self::TABLE.name,
                reason: format!("found {}", json_kind(&other)),
            }),
        }
    }

    /// Decode JSON, mapping an unknown label to the sentinel.
    fn decode_json_lenient(bytes: &[u8]) -> Result<Self, EnumError> {
        recover_unrecognized(Self::decode_json(bytes))
    }

    /// SQL value: the label text, or `None` (SQL `NULL`) for the sentinel.
    #[must_use]
    fn encode_sql(self) -> Option<&'static str> {
        self.canonical_label()
    }

    /// Decode a SQL scalar; `NULL` yields the sentinel.
    fn decode_sql(scalar: SqlScalar<'_>) -> Result<Self, EnumError> {
        match scalar {
            SqlScalar::Null => Ok(Self::TABLE.invalid),
            SqlScalar::Text(text) => Self::parse(text),
            SqlScalar::Bytes(bytes) => match std::str::from_utf8(bytes) {
                Ok(text) => Self::parse(text),
                Err(_) => Err(EnumError::IncompatibleSqlType {
                    type_name: Self::TABLE.name,
                    found: "non-UTF-8 BLOB".to_owned(),
                }),
            },
            other @ (SqlScalar::Int(_) | SqlScalar::Float(_) | SqlScalar::Bool(_)) => {
                Err(EnumError::IncompatibleSqlType {
                    type_name: Self::TABLE.name,
                    found: other.kind().to_owned(),
                })
            },
        }
    }

    /// Decode a SQL scalar, mapping an unknown label to the sentinel.
    fn decode_sql_lenient(scalar: SqlScalar<'_>) -> Result<Self, EnumError> {
        recover_unrecognized(Self::decode_sql(scalar))
    }
}

fn recover_unrecognized<T: ClosedEnum>(result: Result<T, EnumError>) -> Result<T, EnumError> {
    match result {
        Err(error) if error.is_unrecognized_label() => {
            tracing::debug!(
                enum_type = T::TABLE.name,
                %error,
                "unrecognized label replaced by sentinel"
            );
            Ok(T::TABLE.invalid)
        },
        other => other,
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Serde serialization shared by every enumeration.
pub fn serialize<T, S>(value: T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ClosedEnum,
    S: Serializer,
{
    match value.canonical_label() {
        Some(label) => serializer.serialize_str(label),
        None => serializer.serialize_none(),
    }
}

/// Strict serde deserialization shared by every enumeration.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: ClosedEnum,
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(LabelVisitor::<T>(PhantomData))
}

/// Lenient `deserialize_with` helper: unknown labels become the sentinel.
///
/// ```
/// use restkit_domain::{Platform, codec};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Header {
///     #[serde(deserialize_with = "codec::lenient")]
///     platform: Platform,
/// }
///
/// let header: Header = serde_json::from_str(r#"{"platform":"symbian"}"#)?;
/// assert_eq!(header.platform, Platform::Invalid);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn lenient<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: ClosedEnum,
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map_or(T::TABLE.invalid, |label| T::parse_or_invalid(&label)))
}

struct LabelVisitor<T>(PhantomData<T>);

impl<'de, T: ClosedEnum> Visitor<'de> for LabelVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a {} label or null", T::TABLE.name)
    }

    fn visit_none<E: de::Error>(self) -> Result<T, E> {
        Ok(T::TABLE.invalid)
    }

    fn visit_unit<E: de::Error>(self) -> Result<T, E> {
        Ok(T::TABLE.invalid)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<T, D::Error> {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        T::parse(value).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cycle, PayMethod};

    #[test]
    fn table_lookup_prefers_canonical_then_alias() {
        let table = PayMethod::TABLE;
        assert_eq!(table.lookup("wechat"), Some(PayMethod::Wechat));
        assert_eq!(table.lookup("tenpay"), Some(PayMethod::Wechat));
        assert_eq!(table.lookup("WECHAT"), None);
        assert_eq!(table.label_of(PayMethod::Wechat), Some("wechat"));
        assert_eq!(table.label_of(PayMethod::Invalid), None);
    }

    #[test]
    fn sql_scalar_kinds_are_named() {
        assert_eq!(SqlScalar::Null.kind(), "NULL");
        assert_eq!(SqlScalar::Int(4).kind(), "INTEGER");
        assert_eq!(SqlScalar::Bytes(b"x").kind(), "BLOB");
    }

    #[test]
    fn json_non_string_is_malformed() {
        let error = Cycle::decode_json(b"12").err();
        assert!(matches!(
            error,
            Some(EnumError::MalformedJson { type_name: "Cycle", .. })
        ));

        let error = Cycle::decode_json(b"{\"cycle\"").err();
        assert!(matches!(error, Some(EnumError::MalformedJson { .. })));
    }

    #[test]
    fn lenient_wrappers_only_swallow_unknown_labels() {
        assert_eq!(
            Cycle::decode_json_lenient(br#""fortnight""#),
            Ok(Cycle::Invalid)
        );
        assert!(Cycle::decode_json_lenient(b"true").is_err());
        assert_eq!(
            Cycle::decode_sql_lenient(SqlScalar::Text("week")),
            Ok(Cycle::Invalid)
        );
        assert!(Cycle::decode_sql_lenient(SqlScalar::Float(1.5)).is_err());
    }

    #[test]
    fn non_utf8_blob_is_incompatible() {
        let error = Cycle::decode_sql(SqlScalar::Bytes(&[0xff, 0xfe])).err();
        assert!(matches!(error, Some(EnumError::IncompatibleSqlType { .. })));
    }

    #[test]
    fn request_and_storage_mappings_differ_in_kind() {
        let error = EnumError::UnrecognizedLabel {
            type_name: "Cycle",
            input: "week".to_owned(),
        };

        let request = error.clone().into_request_error();
        assert_eq!(request.kind, restkit_shared::ErrorKind::Expected);
        assert_eq!(request.code, ErrorCode::new("enum", "unrecognized_label"));
        assert_eq!(request.metadata.get("input").map(String::as_str), Some("week"));

        let storage = error.into_storage_error();
        assert_eq!(storage.kind, restkit_shared::ErrorKind::Invariant);
        assert_eq!(storage.code, ErrorCode::new("enum", "stored_data"));
        assert_eq!(
            storage.metadata.get("cause").map(String::as_str),
            Some("unrecognized_label")
        );
        assert!(!storage.class.is_retriable());
    }

    #[test]
    fn locale_codes_round_trip() {
        assert_eq!(Locale::from_code("cn"), Some(Locale::Chinese));
        assert_eq!(Locale::from_code("en"), Some(Locale::English));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::English.to_string(), "en");
    }

    #[test]
    fn ordinals_resolve_including_sentinel() {
        assert_eq!(Cycle::from_ordinal(SENTINEL_ORDINAL), Some(Cycle::Invalid));
        assert_eq!(Cycle::from_ordinal(0), Some(Cycle::Month));
        assert_eq!(Cycle::from_ordinal(1), Some(Cycle::Year));
        assert_eq!(Cycle::from_ordinal(2), None);
        assert_eq!(Cycle::Year.ordinal(), 1);
    }
}
