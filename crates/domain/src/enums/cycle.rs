use crate::macros::closed_enum;
use chrono::{DateTime, Datelike, Days, Months, TimeZone};

closed_enum! {
    /// Billing cycle of a subscription plan.
    pub enum Cycle {
        /// No cycle selected.
        Invalid = -1,
        /// Billed monthly.
        Month = 0 => "month",
        /// Billed yearly.
        Year = 1 => "year",
    }
    chinese {
        Month => "月",
        Year => "年",
    }
    english {
        Month => "Month",
        Year => "Year",
    }
}

impl Cycle {
    /// Move a timestamp forward by one billing cycle plus one grace day.
    ///
    /// Day overflow rolls into the following month rather than clamping:
    /// Jan 31 + 1 month is Mar 2 (Mar 3 with the grace day) in a leap year.
    /// Returns `None` for [`Cycle::Invalid`] or on overflow.
    pub fn advance<Tz: TimeZone>(self, from: DateTime<Tz>) -> Option<DateTime<Tz>> {
        let months = match self {
            Self::Month => Months::new(1),
            Self::Year => Months::new(12),
            Self::Invalid => return None,
        };
        // Day N of the target month is its first day plus N - 1 days; the
        // grace day makes the offset N.
        let day = u64::from(from.day());
        from.with_day(1)?
            .checked_add_months(months)?
            .checked_add_days(Days::new(day))
    }
}
