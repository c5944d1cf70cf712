use crate::macros::closed_enum;

closed_enum! {
    /// How a user signed in.
    pub enum LoginMethod {
        /// Unknown login method.
        Invalid = -1,
        /// Email and password.
        Email = 0 => "email",
        /// Wechat OAuth.
        Wechat = 1 => "wechat",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ClosedEnum;

    #[test]
    fn unknown_method_is_rejected_strictly() {
        assert!(LoginMethod::decode_json(br#""unknown""#).is_err());
        assert_eq!(
            LoginMethod::decode_json_lenient(br#""unknown""#),
            Ok(LoginMethod::Invalid)
        );
    }

    #[test]
    fn encodes_json() {
        assert_eq!(LoginMethod::Wechat.encode_json(), r#""wechat""#);
        assert_eq!(LoginMethod::Email.encode_json(), r#""email""#);
        assert_eq!(LoginMethod::Invalid.encode_json(), "null");
    }
}
