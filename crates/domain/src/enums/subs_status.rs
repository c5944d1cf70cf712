use crate::macros::closed_enum;

closed_enum! {
    /// Stripe-style lifecycle status of a subscription.
    pub enum SubsStatus {
        /// Status not known.
        Invalid = -1,
        /// Paid and current.
        Active = 0 => "active",
        /// Canceled by the member or the provider.
        Canceled = 1 => "canceled",
        /// First payment not yet confirmed.
        Incomplete = 2 => "incomplete",
        /// First payment never confirmed.
        IncompleteExpired = 3 => "incomplete_expired",
        /// Renewal payment failed and is being retried.
        PastDue = 4 => "past_due",
        /// In a free trial.
        Trialing = 5 => "trialing",
        /// Renewal retries exhausted.
        Unpaid = 6 => "unpaid",
    }
}

impl SubsStatus {
    /// Whether a new subscription may replace one in this status.
    pub const fn should_create(self) -> bool {
        matches!(
            self,
            Self::Invalid | Self::IncompleteExpired | Self::PastDue | Self::Canceled | Self::Unpaid
        )
    }
}
