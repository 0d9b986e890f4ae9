//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /account - Create new account
//! - GET /account - List all accounts
//! - GET /account/{id} - Get account by ID
//! - DELETE /account/{id} - Soft-delete an account

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
};

use crate::{
    error::AppError,
    models::account::{Account, CreateAccountRequest},
    storage::SharedStorage,
};

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the persisted account, including its new id
/// - **Error (400)**: body is not valid JSON for this shape, or the insert failed
///
/// The body is decoded whatever its `Content-Type` says.
pub async fn create_account(
    State(store): State<SharedStorage>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Account>, AppError> {
    let Json(request) = Json::<CreateAccountRequest>::from_bytes(&body?)?;

    let mut account = Account::new(request.first_name, request.last_name);
    store.create_account(&mut account).await?;

    tracing::info!(id = account.id, "Created account");
    Ok(Json(account))
}

/// List every account, soft-deleted ones included.
///
/// # Ordering
///
/// Whatever order the store scans rows in, normally insertion order.
pub async fn list_accounts(
    State(store): State<SharedStorage>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = store.get_accounts().await?;
    Ok(Json(accounts))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: account details, even if soft-deleted
/// - **Error (400)**: id is not an integer, or no such account
pub async fn get_account(
    State(store): State<SharedStorage>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Account>, AppError> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;
    let account = store.get_account_by_id(id).await?;
    Ok(Json(account))
}

/// Soft-delete an account and return its updated state.
///
/// Deleting an id that does not exist still reaches the follow-up read,
/// which reports it as not found.
pub async fn delete_account(
    State(store): State<SharedStorage>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Account>, AppError> {
    let Path(raw_id) = path?;
    let id = parse_id(&raw_id)?;

    store.delete_account(id).await?;
    let account = store.get_account_by_id(id).await?;

    Ok(Json(account))
}

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidAccountId(raw.to_string()))
}
