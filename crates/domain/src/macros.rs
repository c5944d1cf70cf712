//! Declarative table macro for closed enumerations.

/// Declare a closed enumeration from its value table.
///
/// The first variant is the sentinel and must be `= -1`; labelled variants
/// follow with zero-based ordinals. Optional `aliases`, `chinese` and
/// `english` sections add decode-only labels and display translations.
///
/// Generates the enum plus `ClosedEnum`, `Display`, `FromStr`, serde and
/// (feature `mysql`) sqlx impls, all delegating to the shared table.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$invalid_meta:meta])*
            $invalid:ident = -1,
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $ordinal:literal => $label:literal
            ),+ $(,)?
        }
        $(aliases { $($alias:literal => $alias_target:ident),+ $(,)? })?
        $(chinese { $($cn_variant:ident => $cn_text:literal),+ $(,)? })?
        $(english { $($en_variant:ident => $en_text:literal),+ $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(i16)]
        $vis enum $name {
            $(#[$invalid_meta])*
            #[default]
            $invalid = -1,
            $(
                $(#[$variant_meta])*
                $variant = $ordinal,
            )+
        }

        impl $crate::codec::ClosedEnum for $name {
            const TABLE: $crate::codec::EnumTable<Self> = $crate::codec::EnumTable {
                name: stringify!($name),
                invalid: Self::$invalid,
                entries: &[
                    $($crate::codec::Entry { value: Self::$variant, label: $label },)+
                ],
                aliases: &[$($(($alias, Self::$alias_target),)+)?],
                chinese: &[$($((Self::$cn_variant, $cn_text),)+)?],
                english: &[$($((Self::$en_variant, $en_text),)+)?],
            };

            fn ordinal(self) -> i16 {
                self as i16
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter.write_str($crate::codec::ClosedEnum::to_label(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::codec::EnumError;

            fn from_str(label: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::codec::ClosedEnum>::parse(label)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                $crate::codec::serialize(*self, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                $crate::codec::deserialize(deserializer)
            }
        }

        #[cfg(feature = "mysql")]
        impl ::sqlx::Type<::sqlx::MySql> for $name {
            fn type_info() -> ::sqlx::mysql::MySqlTypeInfo {
                $crate::sql::text_type_info()
            }

            fn compatible(ty: &::sqlx::mysql::MySqlTypeInfo) -> bool {
                $crate::sql::is_text_compatible(ty)
            }
        }

        #[cfg(feature = "mysql")]
        impl ::sqlx::Encode<'_, ::sqlx::MySql> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut Vec<u8>,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                $crate::sql::encode_text(
                    $crate::codec::ClosedEnum::encode_sql(*self),
                    buf,
                )
            }
        }

        #[cfg(feature = "mysql")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::MySql> for $name {
            fn decode(
                value: ::sqlx::mysql::MySqlValueRef<'r>,
            ) -> ::std::result::Result<Self, ::sqlx::error::BoxDynError> {
                $crate::sql::decode_enum(value)
            }
        }
    };
}

pub(crate) use closed_enum;
