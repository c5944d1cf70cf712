use crate::macros::closed_enum;

closed_enum! {
    /// Self-reported gender on a user profile.
    pub enum Gender {
        /// No gender recorded.
        Invalid = -1,
        /// Female.
        Female = 0 => "F",
        /// Male.
        Male = 1 => "M",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ClosedEnum;

    #[test]
    fn labels_are_single_letters() {
        assert_eq!(Gender::parse("M"), Ok(Gender::Male));
        assert_eq!(Gender::parse("F"), Ok(Gender::Female));
        assert!(Gender::parse("m").is_err());
        assert_eq!(Gender::Invalid.to_label(), "");
    }

    #[test]
    fn profile_without_gender_decodes_null() -> Result<(), serde_json::Error> {
        #[derive(serde::Deserialize)]
        struct Profile {
            gender: Gender,
        }

        let profile: Profile = serde_json::from_str(r#"{"gender": null}"#)?;
        assert_eq!(profile.gender, Gender::Invalid);
        let profile: Profile = serde_json::from_str(r#"{"gender": "F"}"#)?;
        assert_eq!(profile.gender, Gender::Female);
        Ok(())
    }
}
