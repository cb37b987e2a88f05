//! Transport-agnostic error payload.
//!
//! Signup validation failures are not errors; they travel inside a
//! [`ValidationResult`](crate::domain::ValidationResult). This type covers
//! what remains: malformed submissions and internal faults. Inbound adapters
//! map it to protocol-specific responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::trace_id::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request could not be decoded.
    InvalidRequest,
    /// An unexpected error occurred while handling the request.
    InternalError,
}

/// Error payload shared by every adapter.
///
/// The ambient [`TraceId`] is captured at construction so responses can be
/// correlated with logs.
///
/// # Examples
/// ```
/// use signup::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_request("body must be valid JSON");
/// assert_eq!(err.code(), ErrorCode::InvalidRequest);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "Request body must be valid JSON")]
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create an error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach structured details to the error.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Override the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier, if one was in scope.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary details for clients.
    #[must_use]
    pub const fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use uuid::Uuid;

    #[rstest]
    fn constructors_set_codes() {
        assert_eq!(
            Error::invalid_request("bad").code(),
            ErrorCode::InvalidRequest
        );
        assert_eq!(Error::internal("boom").code(), ErrorCode::InternalError);
    }

    #[rstest]
    fn no_trace_id_outside_request_scope() {
        assert!(Error::internal("boom").trace_id().is_none());
    }

    #[tokio::test]
    async fn captures_trace_id_in_scope() {
        let trace_id = TraceId::from_uuid(Uuid::nil());
        let error = TraceId::scope(trace_id, async { Error::invalid_request("bad") }).await;
        assert_eq!(error.trace_id(), Some(Uuid::nil().to_string().as_str()));
    }

    #[rstest]
    fn serialises_in_camel_case_and_skips_empty_fields() {
        let error = Error::invalid_request("bad")
            .with_trace_id("abc")
            .with_details(json!({ "field": "email" }));
        let value = serde_json::to_value(&error).expect("serialise error");
        assert_eq!(
            value,
            json!({
                "code": "invalid_request",
                "message": "bad",
                "traceId": "abc",
                "details": { "field": "email" },
            })
        );

        let bare = serde_json::to_value(Error::internal("boom")).expect("serialise error");
        assert_eq!(bare, json!({ "code": "internal_error", "message": "boom" }));
    }
}
