use crate::macros::closed_enum;

closed_enum! {
    /// Which identity an account is built on.
    pub enum AccountKind {
        /// Unknown account kind.
        Invalid = -1,
        /// Email-based account.
        Ftc = 0 => "ftc",
        /// Wechat-only account.
        Wechat = 1 => "wechat",
        /// Email account linked to Wechat.
        Linked = 2 => "linked",
    }
}
