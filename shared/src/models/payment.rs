//! Payment method (支付方式)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method accepted at the front desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PaymentMethod {
    Cash,
    Kpay,
    Ayapay,
    Wavepay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [Self::Cash, Self::Kpay, Self::Ayapay, Self::Wavepay];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Kpay => "KPAY",
            Self::Ayapay => "AYAPAY",
            Self::Wavepay => "WAVEPAY",
        }
    }

    /// Mobile wallet payments; counted as online room revenue
    pub const fn is_online(&self) -> bool {
        !matches!(self, Self::Cash)
    }

    /// Case-insensitive lookup; `None` for unknown names
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value))
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Cash
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(PaymentMethod::parse("kpay"), Some(PaymentMethod::Kpay));
        assert_eq!(PaymentMethod::parse(" CASH "), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse("VISA"), None);
        assert_eq!(PaymentMethod::parse(""), None);
    }

    #[test]
    fn test_online() {
        assert!(!PaymentMethod::Cash.is_online());
        assert!(PaymentMethod::Wavepay.is_online());
    }
}
