//! A list of strings stored in one comma-separated text column.

use crate::codec::SqlScalar;
use serde::{Deserialize, Serialize};

const SEPARATOR: &str = ",";

/// Errors from reading a [`StringSlice`] column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StringSliceError {
    /// The column was not text.
    #[error("string list cannot be scanned from SQL {found}")]
    IncompatibleSqlType {
        /// The SQL type that was found.
        found: String,
    },
}

/// Ordered strings persisted as `a,b,c` (or `NULL` when empty).
///
/// Items must not contain commas; they would split on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringSlice(Vec<String>);

impl StringSlice {
    /// Wrap a list of strings.
    pub const fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    /// Borrow the items.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Take the items.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Returns true when there are no items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column text, `None` (SQL `NULL`) when there is nothing to store.
    pub fn to_sql(&self) -> Option<String> {
        let joined = self.0.join(SEPARATOR);
        (!joined.is_empty()).then_some(joined)
    }

    /// Read a column value. `NULL` and empty text are an empty list.
    pub fn from_sql(scalar: SqlScalar<'_>) -> Result<Self, StringSliceError> {
        let text = match scalar {
            SqlScalar::Null => return Ok(Self::default()),
            SqlScalar::Text(text) => text,
            SqlScalar::Bytes(bytes) => std::str::from_utf8(bytes).map_err(|_| {
                StringSliceError::IncompatibleSqlType {
                    found: "non-UTF-8 BLOB".to_owned(),
                }
            })?,
            other @ (SqlScalar::Int(_) | SqlScalar::Float(_) | SqlScalar::Bool(_)) => {
                return Err(StringSliceError::IncompatibleSqlType {
                    found: other.kind().to_owned(),
                });
            },
        };

        if text.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self(text.split(SEPARATOR).map(str::to_owned).collect()))
    }
}

impl From<Vec<String>> for StringSlice {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl FromIterator<String> for StringSlice {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(feature = "mysql")]
mod mysql {
    use super::StringSlice;
    use crate::sql;
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::mysql::{MySql, MySqlTypeInfo, MySqlValueRef};

    impl sqlx::Type<MySql> for StringSlice {
        fn type_info() -> MySqlTypeInfo {
            sql::text_type_info()
        }

        fn compatible(ty: &MySqlTypeInfo) -> bool {
            sql::is_text_compatible(ty)
        }
    }

    impl sqlx::Encode<'_, MySql> for StringSlice {
        fn encode_by_ref(&self, buf: &mut Vec<u8>) -> Result<IsNull, BoxDynError> {
            sql::encode_text(self.to_sql().as_deref(), buf)
        }
    }

    impl<'r> sqlx::Decode<'r, MySql> for StringSlice {
        fn decode(value: MySqlValueRef<'r>) -> Result<Self, BoxDynError> {
            let scalar = sql::read_scalar(value, "StringSlice")?;
            Self::from_sql(scalar).map_err(Into::into)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(items: &[&str]) -> StringSlice {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[test]
    fn empty_list_is_null() {
        assert_eq!(StringSlice::default().to_sql(), None);
        assert_eq!(StringSlice::from_sql(SqlScalar::Null), Ok(StringSlice::default()));
        assert_eq!(StringSlice::from_sql(SqlScalar::Text("")), Ok(StringSlice::default()));
    }

    #[test]
    fn joins_and_splits_on_commas() {
        let tags = slice(&["news", "finance", "asia"]);
        assert_eq!(tags.to_sql().as_deref(), Some("news,finance,asia"));
        assert_eq!(
            StringSlice::from_sql(SqlScalar::Bytes(b"news,finance,asia")),
            Ok(tags)
        );
    }

    #[test]
    fn numbers_are_incompatible() {
        assert_eq!(
            StringSlice::from_sql(SqlScalar::Int(3)),
            Err(StringSliceError::IncompatibleSqlType {
                found: "INTEGER".to_owned()
            })
        );
    }

    #[test]
    fn json_is_a_plain_array() -> Result<(), serde_json::Error> {
        let tags = slice(&["a", "b"]);
        assert_eq!(serde_json::to_string(&tags)?, r#"["a","b"]"#);
        let parsed: StringSlice = serde_json::from_str(r#"["a","b"]"#)?;
        assert_eq!(parsed, tags);
        Ok(())
    }
}
