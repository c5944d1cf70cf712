//! sqlx MySQL column adapter.
//!
//! Closed enumerations and [`crate::StringSlice`] are stored as nullable text
//! columns. MySQL hands text back as bytes, so decoding goes through
//! [`SqlScalar::Bytes`] after the column type has been checked.

use crate::codec::{ClosedEnum, EnumError, SqlScalar};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::mysql::{MySql, MySqlTypeInfo, MySqlValueRef};
use sqlx::{Decode, Encode, Type, TypeInfo, ValueRef};

/// Column type advertised for text-backed values.
pub fn text_type_info() -> MySqlTypeInfo {
    <str as Type<MySql>>::type_info()
}

/// Text, enum and blob columns are accepted.
pub fn is_text_compatible(ty: &MySqlTypeInfo) -> bool {
    <str as Type<MySql>>::compatible(ty) || <[u8] as Type<MySql>>::compatible(ty)
}

/// Bind optional text, writing SQL `NULL` for `None`.
pub fn encode_text(text: Option<&str>, buf: &mut Vec<u8>) -> Result<IsNull, BoxDynError> {
    match text {
        Some(text) => <&str as Encode<'_, MySql>>::encode_by_ref(&text, buf),
        None => Ok(IsNull::Yes),
    }
}

/// Read a column as a [`SqlScalar`], rejecting non-text column types.
pub fn read_scalar<'r>(
    value: MySqlValueRef<'r>,
    type_name: &'static str,
) -> Result<SqlScalar<'r>, BoxDynError> {
    if value.is_null() {
        return Ok(SqlScalar::Null);
    }

    if !is_text_compatible(&value.type_info()) {
        let found = value.type_info().name().to_owned();
        return Err(EnumError::IncompatibleSqlType { type_name, found }.into());
    }

    let bytes = <&'r [u8] as Decode<'r, MySql>>::decode(value)?;
    Ok(SqlScalar::Bytes(bytes))
}

/// Decode a closed enumeration column (strict).
pub fn decode_enum<T: ClosedEnum>(value: MySqlValueRef<'_>) -> Result<T, BoxDynError> {
    let scalar = read_scalar(value, T::TABLE.name)?;
    T::decode_sql(scalar).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cycle, StringSlice};
    use std::error::Error;

    #[test]
    fn none_binds_null_without_bytes() -> Result<(), Box<dyn Error>> {
        let mut buf = Vec::new();
        let is_null = encode_text(None, &mut buf).map_err(|error| error.to_string())?;
        assert!(matches!(is_null, IsNull::Yes));
        assert!(buf.is_empty());
        Ok(())
    }

    #[test]
    fn text_is_length_prefixed() -> Result<(), Box<dyn Error>> {
        let mut buf = Vec::new();
        let is_null = encode_text(Some("month"), &mut buf).map_err(|error| error.to_string())?;
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(buf, [5, b'm', b'o', b'n', b't', b'h']);
        Ok(())
    }

    #[test]
    fn only_text_and_blob_columns_are_compatible() {
        assert!(!is_text_compatible(&<i64 as Type<MySql>>::type_info()));
        assert!(!is_text_compatible(&<f64 as Type<MySql>>::type_info()));
        assert!(is_text_compatible(&<str as Type<MySql>>::type_info()));
        assert!(is_text_compatible(&<[u8] as Type<MySql>>::type_info()));
    }

    #[test]
    fn stored_types_advertise_text() {
        assert_eq!(<Cycle as Type<MySql>>::type_info(), text_type_info());
        assert_eq!(<StringSlice as Type<MySql>>::type_info(), text_type_info());
    }
}
