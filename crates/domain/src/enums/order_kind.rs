use crate::macros::closed_enum;

closed_enum! {
    /// What a subscription order purchases.
    ///
    /// `switch_cycle` is only produced by older clients; it stays decodable
    /// so historical orders can still be read.
    pub enum OrderKind {
        /// Unknown order kind.
        Invalid = -1,
        /// First purchase.
        Create = 0 => "create",
        /// Renewal of the same tier.
        Renew = 1 => "renew",
        /// Standard to premium.
        Upgrade = 2 => "upgrade",
        /// Premium to standard.
        Downgrade = 3 => "downgrade",
        /// Add-on purchased on top of a running subscription.
        AddOn = 4 => "add_on",
        /// Switch between monthly and yearly billing.
        SwitchCycle = 5 => "switch_cycle",
    }
    chinese {
        Create => "订阅",
        Renew => "续订",
        Upgrade => "升级订阅",
        Downgrade => "购买标准版",
        AddOn => "补充包",
        SwitchCycle => "更改订阅周期",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ClosedEnum, Locale};

    #[test]
    fn historical_label_round_trips() {
        assert_eq!(OrderKind::parse("switch_cycle"), Ok(OrderKind::SwitchCycle));
        assert_eq!(OrderKind::SwitchCycle.encode_sql(), Some("switch_cycle"));
    }

    #[test]
    fn only_chinese_is_translated() {
        assert_eq!(OrderKind::AddOn.to_display(Locale::Chinese), "补充包");
        assert_eq!(OrderKind::AddOn.to_display(Locale::English), "");
    }
}
