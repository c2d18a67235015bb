//! Caller Extractor
//!
//! Resolves [`CurrentUser`] from the identity headers set by the gateway

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;

use crate::auth::CurrentUser;
use crate::core::ServerState;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user = CurrentUser::from_headers(&parts.headers).inspect_err(|e| {
            tracing::warn!(uri = %parts.uri, code = %e.code, "Caller identity rejected");
        })?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
