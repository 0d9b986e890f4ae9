//! HTTP request handlers and the routing table.
//!
//! Each handler is an async function that:
//! 1. Receives request data (JSON body, path segment)
//! 2. Calls into the injected [`Storage`](crate::storage::Storage)
//! 3. Returns JSON, or an `AppError` that becomes the uniform error body

/// Account management endpoints
pub mod accounts;
/// Service health endpoint
pub mod health;
/// Transfer endpoint
pub mod transfer;

use axum::{
    Router,
    http::{Method, Uri},
    routing::{any, get},
};

use crate::{error::AppError, storage::SharedStorage};

/// Build the application router around a storage handle.
///
/// # Routes
///
/// - `GET /account`, `POST /account`
/// - `GET /account/{id}`, `DELETE /account/{id}`
/// - `/transfer` (any method)
/// - `GET /health`
///
/// Other methods on the account paths, HEAD included, and unknown paths
/// answer with a 400 error body.
pub fn router(store: SharedStorage) -> Router {
    Router::new()
        .route(
            "/account",
            get(accounts::list_accounts)
                .post(accounts::create_account)
                // GET routes answer HEAD unless it is routed explicitly
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/account/{id}",
            get(accounts::get_account)
                .delete(accounts::delete_account)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route("/transfer", any(transfer::transfer))
        .route("/health", get(health::health_check))
        .fallback(route_not_found)
        .with_state(store)
}

async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri)
}
