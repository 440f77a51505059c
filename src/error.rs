use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Uniform wire envelope wrapping every DooTask response.
///
/// `ret == 1` signals business success; only then is `data` worth decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ret: i64,
    #[serde(default)]
    pub msg: String,
    pub data: T,
}

/// Errors surfaced by [`Client`](crate::Client) calls.
///
/// Transport-level failures (connectivity, non-200 statuses) are kept apart
/// from application-level ones (`ret != 1`) so callers can tell a broken
/// network from a rejected request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connect, DNS resolution, or timeout failure below the API layer.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status other than 200. Carries the raw
    /// body text; envelope parsing is not attempted.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not a valid envelope document.
    #[error("parse response failed: {0}")]
    Parse(#[source] serde_json::Error),

    /// The envelope signalled failure (`ret != 1`).
    #[error("{message}")]
    Api { ret: i64, message: String },

    /// The envelope payload did not match the expected shape.
    #[error("unmarshal data failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// A basic-info lookup returned an empty set for the requested user.
    #[error("user not found")]
    UserNotFound,

    /// The caller's profile lacks the required identity tag.
    #[error("insufficient permissions")]
    PermissionDenied,
}

impl ApiError {
    /// Build the application error for a failed envelope, preferring the
    /// server-supplied message over the generic fallback.
    pub(crate) fn from_envelope(ret: i64, msg: String) -> Self {
        let message = if msg.is_empty() {
            format!("API error: {ret}")
        } else {
            msg
        };
        ApiError::Api { ret, message }
    }
}
