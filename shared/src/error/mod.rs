//! Unified error system for the front desk
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`ErrorKind`]: What the caller should do (re-read, fix input, retry)
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Caller-facing taxonomy
//!
//! | Kind | Codes | HTTP |
//! |------|-------|------|
//! | NotFound | `*NotFound` | 404 |
//! | Conflict | `RoomOccupied`, `AlreadyCheckedOut`, `AlreadyTasked`, `NoActiveCleaning`, ... | 409 |
//! | InvalidInput | `ValidationFailed`, `InvalidPaymentMethod`, ... | 400 |
//! | StorageFailure | `DatabaseError`, `InternalError` | 500 |
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::RoomOccupied)
//!     .with_detail("room_number", "101");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(3002));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use http::ErrorKind;
pub use types::{ApiResponse, AppError, AppResult};
