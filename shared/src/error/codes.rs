//! Unified error codes for the front desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Room errors
//! - 4xxx: Stay & reservation errors
//! - 5xxx: Billing errors (payment, food orders, menu)
//! - 6xxx: Housekeeping errors
//! - 7xxx: Revenue errors
//! - 8xxx: Staff errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// Caller identity missing
    NotAuthenticated = 1001,
    /// Caller identity present but malformed
    InvalidIdentity = 1002,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Room ====================
    /// Room not found
    RoomNotFound = 3001,
    /// Room already holds an active stay
    RoomOccupied = 3002,
    /// Room is not available for check-in
    RoomNotAvailable = 3003,
    /// Room status differs from the expected status
    RoomStatusConflict = 3004,
    /// Transition not allowed from the current status
    InvalidStatusTransition = 3005,
    /// Room number already exists
    RoomNumberExists = 3006,

    // ==================== 4xxx: Stay ====================
    /// Guest stay not found
    StayNotFound = 4001,
    /// Guest stay already checked out
    AlreadyCheckedOut = 4002,
    /// Reservation not found
    ReservationNotFound = 4101,
    /// Checkout precedes check-in
    InvalidStayDates = 4102,

    // ==================== 5xxx: Billing ====================
    /// Unsupported payment method
    InvalidPaymentMethod = 5003,
    /// Food order not found
    FoodOrderNotFound = 5101,
    /// Menu item not found
    MenuItemNotFound = 5201,
    /// Menu item name already exists
    MenuItemExists = 5202,

    // ==================== 6xxx: Housekeeping ====================
    /// Cleaning task not found
    CleaningTaskNotFound = 6001,
    /// Room already has an open cleaning task
    AlreadyTasked = 6002,
    /// Room is not waiting for housekeeping
    RoomNotEligible = 6003,
    /// No in-progress cleaning owned by the caller
    NoActiveCleaning = 6004,

    // ==================== 7xxx: Revenue ====================
    /// Report range too large or reversed
    InvalidDateRange = 7001,

    // ==================== 8xxx: Staff ====================
    /// Staff member not found
    StaffNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Caller is not authenticated",
            ErrorCode::InvalidIdentity => "Caller identity is malformed",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Admin role required",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomOccupied => "Room is occupied",
            ErrorCode::RoomNotAvailable => "Room is not available",
            ErrorCode::RoomStatusConflict => "Room status has changed",
            ErrorCode::InvalidStatusTransition => "Room status transition not allowed",
            ErrorCode::RoomNumberExists => "Room number already exists",

            // Stay
            ErrorCode::StayNotFound => "Guest stay not found",
            ErrorCode::AlreadyCheckedOut => "Guest has already checked out",
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::InvalidStayDates => "Checkout date precedes check-in date",

            // Billing
            ErrorCode::InvalidPaymentMethod => "Invalid payment method",
            ErrorCode::FoodOrderNotFound => "Food order not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemExists => "Menu item already exists",

            // Housekeeping
            ErrorCode::CleaningTaskNotFound => "Cleaning task not found",
            ErrorCode::AlreadyTasked => "Room already has an open cleaning task",
            ErrorCode::RoomNotEligible => "Room is not eligible for cleaning",
            ErrorCode::NoActiveCleaning => "No active cleaning for this staff member",

            // Revenue
            ErrorCode::InvalidDateRange => "Invalid date range",

            // Staff
            ErrorCode::StaffNotFound => "Staff member not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidIdentity),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Room
            3001 => Ok(ErrorCode::RoomNotFound),
            3002 => Ok(ErrorCode::RoomOccupied),
            3003 => Ok(ErrorCode::RoomNotAvailable),
            3004 => Ok(ErrorCode::RoomStatusConflict),
            3005 => Ok(ErrorCode::InvalidStatusTransition),
            3006 => Ok(ErrorCode::RoomNumberExists),

            // Stay
            4001 => Ok(ErrorCode::StayNotFound),
            4002 => Ok(ErrorCode::AlreadyCheckedOut),
            4101 => Ok(ErrorCode::ReservationNotFound),
            4102 => Ok(ErrorCode::InvalidStayDates),

            // Billing
            5003 => Ok(ErrorCode::InvalidPaymentMethod),
            5101 => Ok(ErrorCode::FoodOrderNotFound),
            5201 => Ok(ErrorCode::MenuItemNotFound),
            5202 => Ok(ErrorCode::MenuItemExists),

            // Housekeeping
            6001 => Ok(ErrorCode::CleaningTaskNotFound),
            6002 => Ok(ErrorCode::AlreadyTasked),
            6003 => Ok(ErrorCode::RoomNotEligible),
            6004 => Ok(ErrorCode::NoActiveCleaning),

            // Revenue
            7001 => Ok(ErrorCode::InvalidDateRange),

            // Staff
            8001 => Ok(ErrorCode::StaffNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 36] = [
        ErrorCode::Success,
        ErrorCode::Unknown,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidFormat,
        ErrorCode::RequiredField,
        ErrorCode::ValueOutOfRange,
        ErrorCode::NotAuthenticated,
        ErrorCode::InvalidIdentity,
        ErrorCode::PermissionDenied,
        ErrorCode::AdminRequired,
        ErrorCode::RoomNotFound,
        ErrorCode::RoomOccupied,
        ErrorCode::RoomNotAvailable,
        ErrorCode::RoomStatusConflict,
        ErrorCode::InvalidStatusTransition,
        ErrorCode::RoomNumberExists,
        ErrorCode::StayNotFound,
        ErrorCode::AlreadyCheckedOut,
        ErrorCode::ReservationNotFound,
        ErrorCode::InvalidStayDates,
        ErrorCode::InvalidPaymentMethod,
        ErrorCode::FoodOrderNotFound,
        ErrorCode::MenuItemNotFound,
        ErrorCode::MenuItemExists,
        ErrorCode::CleaningTaskNotFound,
        ErrorCode::AlreadyTasked,
        ErrorCode::RoomNotEligible,
        ErrorCode::NoActiveCleaning,
        ErrorCode::InvalidDateRange,
        ErrorCode::StaffNotFound,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
        ErrorCode::ConfigError,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::RoomOccupied.code(), 3002);
        assert_eq!(ErrorCode::AlreadyCheckedOut.code(), 4002);
        assert_eq!(ErrorCode::InvalidPaymentMethod.code(), 5003);
        assert_eq!(ErrorCode::NoActiveCleaning.code(), 6004);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_matches_every_code() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(3999), Err(InvalidErrorCode(3999)));
        assert_eq!(
            InvalidErrorCode(42).to_string(),
            "invalid error code: 42"
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::AlreadyTasked).unwrap();
        assert_eq!(json, "6002");
        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::RoomNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::RoomOccupied.is_success());
    }
}
