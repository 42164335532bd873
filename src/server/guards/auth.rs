use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderMap, HeaderName, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use subtle::ConstantTimeEq;

use crate::error::{ApiErrorBody, ApiErrorObject};
use crate::server::router::SiteState;

const X_ADMIN_KEY: HeaderName = HeaderName::from_static("x-admin-key");

/// `x-admin-key` wins over `Authorization: Bearer`.
fn presented_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get(X_ADMIN_KEY)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| {
            headers
                .typed_get::<Authorization<Bearer>>()
                .map(|auth| auth.token().to_string())
        })
}

fn key_matches(presented: &str, expected: &str) -> bool {
    !expected.is_empty() && bool::from(presented.as_bytes().ct_eq(expected.as_bytes()))
}

/// Gate for catalog edits and refresh hooks.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdminKey;

impl FromRequestParts<SiteState> for RequireAdminKey {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SiteState,
    ) -> Result<Self, Self::Rejection> {
        let presented = presented_key(&parts.headers).ok_or(AuthError::MissingKey)?;
        if key_matches(&presented, &state.admin_key) {
            Ok(RequireAdminKey)
        } else {
            Err(AuthError::InvalidKey)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingKey,
    InvalidKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingKey => "Missing admin key",
            AuthError::InvalidKey => "Invalid admin key",
        };
        let body = ApiErrorBody {
            inner: ApiErrorObject {
                code: "UNAUTHORIZED".to_string(),
                message: message.to_string(),
                details: None,
            },
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}
