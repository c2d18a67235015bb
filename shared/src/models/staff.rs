//! Staff Model (员工)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Staff role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum StaffRole {
    Admin,
    Receptionist,
    Housekeeping,
}

impl StaffRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Receptionist => "RECEPTIONIST",
            Self::Housekeeping => "HOUSEKEEPING",
        }
    }
}

impl FromStr for StaffRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "RECEPTIONIST" => Ok(Self::Receptionist),
            "HOUSEKEEPING" => Ok(Self::Housekeeping),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub role: StaffRole,
    pub created_at: i64,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub name: String,
    pub role: StaffRole,
}
