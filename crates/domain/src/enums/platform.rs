use crate::macros::closed_enum;

closed_enum! {
    /// Client platform a request originates from.
    pub enum Platform {
        /// Unknown or missing platform.
        Invalid = -1,
        /// Browser clients.
        Web = 0 => "web",
        /// iOS app.
        Ios = 1 => "ios",
        /// Android app.
        Android = 2 => "android",
    }
}
