//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Room errors (3xxx)
    Room,
    /// Stay & reservation errors (4xxx)
    Stay,
    /// Billing errors (5xxx)
    Billing,
    /// Housekeeping errors (6xxx)
    Housekeeping,
    /// Revenue errors (7xxx)
    Revenue,
    /// Staff errors (8xxx)
    Staff,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Room,
            4000..5000 => Self::Stay,
            5000..6000 => Self::Billing,
            6000..7000 => Self::Housekeeping,
            7000..8000 => Self::Revenue,
            8000..9000 => Self::Staff,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Room => "room",
            Self::Stay => "stay",
            Self::Billing => "billing",
            Self::Housekeeping => "housekeeping",
            Self::Revenue => "revenue",
            Self::Staff => "staff",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::Room);
        assert_eq!(ErrorCategory::from_code(4002), ErrorCategory::Stay);
        assert_eq!(ErrorCategory::from_code(5101), ErrorCategory::Billing);
        assert_eq!(ErrorCategory::from_code(6004), ErrorCategory::Housekeeping);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Revenue);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Staff);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::RoomOccupied.category(), ErrorCategory::Room);
        assert_eq!(ErrorCode::NoActiveCleaning.category(), ErrorCategory::Housekeeping);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Housekeeping).unwrap();
        assert_eq!(json, "\"housekeeping\"");
        let category: ErrorCategory = serde_json::from_str("\"billing\"").unwrap();
        assert_eq!(category, ErrorCategory::Billing);
        assert_eq!(category.name(), "billing");
    }
}
