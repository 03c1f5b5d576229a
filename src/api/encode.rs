//! Response encoding
//!
//! The single place where a resolver outcome becomes an HTTP response.
//! Encoding happens only after the full result or error is known; no partial
//! responses are ever emitted.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::types::RecommendationResult;
use crate::{Error, Result};

/// Convert a resolver outcome into an HTTP response.
///
/// Success is `200` with the bare score as a UTF-8 text body. Failures map
/// per the error taxonomy: `InvalidKey` → 400, `ResolverUnavailable` → 503,
/// everything else → 500.
pub fn encode(result: Result<RecommendationResult>) -> Response {
    match result {
        Ok(result) => (StatusCode::OK, result.to_string()).into_response(),
        Err(err) => {
            let status = status_for(&err);
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!(error = %err, "Recommendation lookup failed");
            } else {
                tracing::warn!(error = %err, status = %status, "Recommendation lookup rejected");
            }
            (status, err.to_string()).into_response()
        }
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidKey(_) => StatusCode::BAD_REQUEST,
        Error::ResolverUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
