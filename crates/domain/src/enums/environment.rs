use crate::macros::closed_enum;

closed_enum! {
    /// App store environment a receipt was issued in.
    pub enum Environment {
        /// Unknown environment.
        Invalid = -1,
        /// Live store.
        Production = 0 => "Production",
        /// Store sandbox.
        Sandbox = 1 => "Sandbox",
    }
    aliases {
        "PROD" => Production,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ClosedEnum, SqlScalar};

    #[test]
    fn receipt_alias_decodes_to_production() {
        assert_eq!(Environment::parse("PROD"), Ok(Environment::Production));
        assert_eq!(
            Environment::decode_sql(SqlScalar::Text("PROD")),
            Ok(Environment::Production)
        );
        assert_eq!(Environment::Production.encode_sql(), Some("Production"));
    }
}
