use crate::macros::closed_enum;

closed_enum! {
    /// Membership tier a subscription grants.
    pub enum Tier {
        /// No membership.
        Invalid = -1,
        /// Standard membership.
        Standard = 0 => "standard",
        /// Premium membership.
        Premium = 1 => "premium",
        /// Complimentary VIP membership.
        Vip = 2 => "vip",
    }
    chinese {
        Standard => "标准会员",
        Premium => "高级会员",
        Vip => "VIP",
    }
    english {
        Standard => "Standard",
        Premium => "Premium",
        Vip => "VIP",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ClosedEnum, Locale};

    #[test]
    fn labels_and_translations() {
        assert_eq!(Tier::Standard.to_label(), "standard");
        assert_eq!(Tier::Premium.to_label(), "premium");
        assert_eq!(Tier::Invalid.to_label(), "");

        assert_eq!(Tier::Standard.to_display(Locale::Chinese), "标准会员");
        assert_eq!(Tier::Premium.to_display(Locale::Chinese), "高级会员");
        assert_eq!(Tier::Premium.to_display(Locale::English), "Premium");
        assert_eq!(Tier::Invalid.to_display(Locale::English), "");
    }

    #[test]
    fn tiers_order_by_ordinal() {
        assert!(Tier::Invalid < Tier::Standard);
        assert!(Tier::Standard < Tier::Premium);
        assert!(Tier::Premium < Tier::Vip);
    }

    #[test]
    fn from_str_uses_strict_parse() {
        assert_eq!("vip".parse::<Tier>(), Ok(Tier::Vip));
        assert!("VIP".parse::<Tier>().is_err());
    }
}
