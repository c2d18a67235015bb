//! `AppError` and the JSON envelope every endpoint answers with

use super::codes::ErrorCode;
use super::http::ErrorKind;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A failed desk operation.
///
/// `details` carries the facts a caller needs to recover, e.g. the room's
/// `current_status` on a conflict or the `staff_id` holding a task.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref()?.get(key)
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn http_status(&self) -> StatusCode {
        self.kind().http_status()
    }

    /// The transaction was rolled back; nothing partial is visible
    pub fn is_storage_failure(&self) -> bool {
        self.kind() == ErrorKind::StorageFailure
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Response envelope.
///
/// Success: `{"code":0,"message":"OK","data":...}`.
/// Failure: `{"code":3002,"kind":"CONFLICT","message":...,"details":{...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            kind: None,
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            kind: Some(err.kind()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }

    fn status(&self) -> StatusCode {
        match (self.kind, self.code) {
            (Some(kind), _) => kind.http_status(),
            (None, None | Some(0)) => StatusCode::OK,
            (None, Some(code)) => ErrorCode::try_from(code)
                .map(|c| c.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let category = self.code.category().name();
        if self.is_storage_failure() {
            tracing::error!(code = %self.code, category, message = %self.message, "Transaction failed");
        } else {
            tracing::debug!(code = %self.code, category, kind = ?self.kind(), "Request rejected");
        }
        ApiResponse::<()>::error(&self).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status(), axum::Json(self)).into_response()
    }
}
