//! Error types and HTTP error response handling.
//!
//! Every handler returns `Result<_, AppError>`. The `IntoResponse` impl below
//! is the one place where a failure becomes an HTTP response, so handlers
//! never build error bodies themselves.

use axum::{
    Json,
    extract::rejection::{BytesRejection, JsonRejection, PathRejection},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Backend Errors**: any `sqlx::Error` (connection, query, row decoding)
/// - **Not Found**: no account row matches the requested id
/// - **Validation Errors**: non-numeric account id in the path
/// - **Decode Errors**: request body is not the expected JSON
/// - **Routing Errors**: unknown path, or verb not supported on a known path
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed.
    ///
    /// The raw backend message is passed through to the client.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// No account with this id exists.
    #[error("Account {0} not found")]
    AccountNotFound(i32),

    /// The `{id}` path segment is not an integer. Holds the literal segment,
    /// or the extractor's message when the segment cannot be decoded.
    #[error("invalid account ID: {0}")]
    InvalidAccountId(String),

    /// Request body could not be decoded.
    ///
    /// The decoder's own message is logged, never returned.
    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("method not allowed {0}")]
    MethodNotAllowed(Method),

    #[error("no route for {0}")]
    RouteNotFound(Uri),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::InvalidPayload
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Failed to read request body");
        AppError::InvalidPayload
    }
}

/// A path segment that cannot be extracted (e.g. invalid UTF-8 after
/// percent-decoding) is reported like any other bad account id.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidAccountId(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Account 42 not found" }
/// ```
///
/// # Status Code
///
/// Every variant maps to 400 Bad Request, including not-found and backend
/// failures. Clients tell failures apart by message only.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(err) => tracing::error!(error = %err, "Storage operation failed"),
            other => tracing::debug!(error = %other, "Request failed"),
        }

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
