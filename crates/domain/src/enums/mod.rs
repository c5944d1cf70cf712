//! The closed enumerations of the subscription domain.
//!
//! Each type is one table declaration; behavior lives in
//! [`crate::codec::ClosedEnum`].

mod account_kind;
mod cycle;
mod environment;
mod gender;
mod login_method;
mod order_kind;
mod pay_method;
mod platform;
mod snapshot_reason;
mod subs_source;
mod subs_status;
mod tier;

pub use account_kind::AccountKind;
pub use cycle::Cycle;
pub use environment::Environment;
pub use gender::Gender;
pub use login_method::LoginMethod;
pub use order_kind::OrderKind;
pub use pay_method::PayMethod;
pub use platform::Platform;
pub use snapshot_reason::SnapshotReason;
pub use subs_source::SubsSource;
pub use subs_status::SubsStatus;
pub use tier::Tier;
