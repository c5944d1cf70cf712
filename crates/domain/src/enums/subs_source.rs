use crate::macros::closed_enum;

closed_enum! {
    /// Where a subscription was sold.
    pub enum SubsSource {
        /// Unknown source.
        Invalid = -1,
        /// Bought by the member directly.
        Retail = 0 => "retail",
        /// Granted through a business licence.
        B2b = 1 => "b2b",
    }
}
