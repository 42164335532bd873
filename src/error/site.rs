use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error as ThisError;

use super::PostgrestErrorBody;

#[derive(Debug, ThisError)]
pub enum SiteError {
    /// The backend answered with a non-success status.
    #[error("Upstream error on table {table}: status={status}, {}", .body.describe())]
    Postgrest {
        table: String,
        status: StatusCode,
        body: PostgrestErrorBody,
    },

    /// Transport-level failure (DNS, connect, timeouts, etc).
    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Actor error: {0}")]
    Actor(String),
}

impl SiteError {
    /// Short text for the visitor-facing alert after a failed write.
    pub fn user_message(&self) -> String {
        match self {
            SiteError::Postgrest { body, .. } => body.describe(),
            SiteError::Reqwest(e) if e.is_timeout() => "timed out".to_string(),
            SiteError::Reqwest(_) => "backend unreachable".to_string(),
            SiteError::NotFound(what) | SiteError::BadRequest(what) => what.clone(),
            _ => "unknown error".to_string(),
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match &self {
            SiteError::Postgrest { table, status, body } => (
                StatusCode::BAD_GATEWAY,
                ApiErrorObject {
                    code: "UPSTREAM_ERROR".to_string(),
                    message: format!(
                        "Error al sincronizar con la base de datos: {}",
                        self.user_message()
                    ),
                    details: Some(json!({
                        "table": table,
                        "status": status.as_u16(),
                        "code": body.code,
                        "hint": body.hint,
                    })),
                },
            ),

            SiteError::Reqwest(_) | SiteError::Json(_) | SiteError::Url(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorObject {
                    code: "UPSTREAM_ERROR".to_string(),
                    message: format!(
                        "Error al sincronizar con la base de datos: {}",
                        self.user_message()
                    ),
                    details: None,
                },
            ),

            SiteError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                ApiErrorObject {
                    code: "NOT_FOUND".to_string(),
                    message: what.clone(),
                    details: None,
                },
            ),

            SiteError::BadRequest(what) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "INVALID_REQUEST".to_string(),
                    message: what.clone(),
                    details: None,
                },
            ),

            SiteError::Config(_) | SiteError::Io(_) | SiteError::Actor(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                },
            ),
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
