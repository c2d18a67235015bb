//! Caller-facing error kinds and their HTTP mapping

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// What the caller should do about an error.
///
/// `Conflict` means the current state forbids the transition: re-read before
/// retrying. `StorageFailure` means the transaction rolled back as a whole and
/// the same request may be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Ok,
    NotFound,
    Conflict,
    InvalidInput,
    Unauthenticated,
    Forbidden,
    StorageFailure,
}

impl ErrorKind {
    pub fn http_status(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether resubmitting the identical request can succeed without a re-read
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::StorageFailure)
    }
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Success => ErrorKind::Ok,

            Self::NotFound
            | Self::RoomNotFound
            | Self::StayNotFound
            | Self::ReservationNotFound
            | Self::FoodOrderNotFound
            | Self::MenuItemNotFound
            | Self::CleaningTaskNotFound
            | Self::StaffNotFound => ErrorKind::NotFound,

            Self::AlreadyExists
            | Self::RoomOccupied
            | Self::RoomNotAvailable
            | Self::RoomStatusConflict
            | Self::InvalidStatusTransition
            | Self::RoomNumberExists
            | Self::AlreadyCheckedOut
            | Self::MenuItemExists
            | Self::AlreadyTasked
            | Self::RoomNotEligible
            | Self::NoActiveCleaning => ErrorKind::Conflict,

            Self::NotAuthenticated | Self::InvalidIdentity => ErrorKind::Unauthenticated,

            Self::PermissionDenied | Self::AdminRequired => ErrorKind::Forbidden,

            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                ErrorKind::StorageFailure
            }

            _ => ErrorKind::InvalidInput,
        }
    }

    pub fn http_status(&self) -> StatusCode {
        self.kind().http_status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_codes() {
        for code in [
            ErrorCode::RoomNotFound,
            ErrorCode::StayNotFound,
            ErrorCode::FoodOrderNotFound,
            ErrorCode::CleaningTaskNotFound,
        ] {
            assert_eq!(code.kind(), ErrorKind::NotFound, "{code:?}");
            assert_eq!(code.http_status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_conflict_codes() {
        for code in [
            ErrorCode::RoomOccupied,
            ErrorCode::AlreadyCheckedOut,
            ErrorCode::AlreadyTasked,
            ErrorCode::NoActiveCleaning,
            ErrorCode::RoomStatusConflict,
        ] {
            assert_eq!(code.kind(), ErrorKind::Conflict, "{code:?}");
            assert_eq!(code.http_status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_invalid_input_codes() {
        assert_eq!(ErrorCode::InvalidPaymentMethod.kind(), ErrorKind::InvalidInput);
        assert_eq!(ErrorCode::ValidationFailed.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            ErrorCode::InvalidDateRange.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_identity_codes() {
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::InvalidIdentity.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::AdminRequired.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_only_storage_failures_are_retryable() {
        assert!(ErrorCode::DatabaseError.kind().is_retryable());
        assert!(!ErrorCode::RoomOccupied.kind().is_retryable());
        assert!(!ErrorCode::ValidationFailed.kind().is_retryable());
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }
}
