use crate::macros::closed_enum;

closed_enum! {
    /// Why a membership snapshot was taken before modification.
    ///
    /// `iap_update` predates `apple_link`; it is kept readable and writable.
    pub enum SnapshotReason {
        /// Reason not recorded.
        Invalid = -1,
        /// Membership renewed.
        Renew = 0 => "renew",
        /// Membership upgraded.
        Upgrade = 1 => "upgrade",
        /// Membership deleted.
        Delete = 2 => "delete",
        /// Accounts linked.
        Link = 3 => "link",
        /// Accounts unlinked.
        Unlink = 4 => "unlink",
        /// Apple subscription linked.
        AppleLink = 5 => "apple_link",
        /// Apple subscription unlinked.
        AppleUnlink = 6 => "apple_unlink",
        /// Business licence granted.
        B2b = 7 => "b2b",
        /// Changed by staff.
        Manual = 8 => "manual",
        /// In-app purchase update.
        IapUpdate = 9 => "iap_update",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ClosedEnum;

    #[test]
    fn every_reason_has_a_distinct_label() {
        let labels: Vec<&str> = SnapshotReason::values().map(ClosedEnum::to_label).collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels.first().copied(), Some("renew"));
        assert_eq!(labels.last().copied(), Some("iap_update"));
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }
}
