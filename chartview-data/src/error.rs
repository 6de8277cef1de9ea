//! Upstream failure classification and normalization
//!
//! The transport clients report failures as [`UpstreamError`]; every public
//! operation funnels them through [`normalize`], which produces the single
//! caller-visible [`chartview_common::Error`]. The normalizer tolerates any
//! failure shape: no body, an empty error list, or junk all degrade to a
//! fixed generic message instead of failing again.

use serde::Deserialize;
use thiserror::Error;

use chartview_common::Error;

/// Fallback message when the upstream failure carries no usable descriptor.
pub const GENERIC_ERROR_MESSAGE: &str = "Unreachable server error";

/// A failed request, as seen by the transport clients.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Request never produced a response (unreachable host, broken stream)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status; `body` is the raw error payload, possibly empty
    #[error("API error {status}")]
    Api { status: u16, body: String },

    /// 2xx response whose body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Structured error body some upstream failures carry.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDescriptor>,
}

#[derive(Debug, Deserialize)]
struct ErrorDescriptor {
    details: Option<String>,
}

/// Convert a failed request into the one domain error.
///
/// If the failure carries a body of the `{ errors: [ { details } ] }` shape,
/// the first descriptor's `details` becomes the message; anything else falls
/// back to [`GENERIC_ERROR_MESSAGE`].
pub fn normalize(error: UpstreamError) -> Error {
    tracing::warn!(error = %error, "Upstream request failed");

    let details = match &error {
        UpstreamError::Api { body, .. } => first_error_details(body),
        _ => None,
    };

    Error::new(details.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()))
}

/// `details` of the first error descriptor, if the body parses to the
/// expected shape. Every nesting level is optional.
fn first_error_details(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.errors.into_iter().next()?.details
}
