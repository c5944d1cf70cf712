use crate::macros::closed_enum;

closed_enum! {
    /// Payment channel used for an order.
    pub enum PayMethod {
        /// No payment channel.
        Invalid = -1,
        /// Alipay.
        Alipay = 0 => "alipay",
        /// Wechat Pay.
        Wechat = 1 => "wechat",
        /// Stripe card payments.
        Stripe = 2 => "stripe",
    }
    aliases {
        "tenpay" => Wechat,
    }
    chinese {
        Alipay => "支付宝",
        Wechat => "微信支付",
        Stripe => "Stripe",
    }
    english {
        Alipay => "Alipay",
        Wechat => "Wechat Pay",
        Stripe => "Stripe",
    }
}
