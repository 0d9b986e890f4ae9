//! Transfer endpoint.
//!
//! Accepts a transfer request and echoes it back. Balances are not touched.

use axum::{Json, body::Bytes, extract::rejection::BytesRejection};

use crate::{error::AppError, models::transfer::TransferRequest};

/// Decode a transfer request and return it unchanged.
///
/// # Request Body
///
/// ```json
/// { "toAccountID": 5, "amount": 100 }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the decoded request
/// - **Error (400)**: body is not a valid transfer request
///
/// The body is decoded whatever its `Content-Type` says.
pub async fn transfer(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TransferRequest>, AppError> {
    let Json(request) = Json::<TransferRequest>::from_bytes(&body?)?;

    tracing::info!(
        to_account_id = request.to_account_id,
        amount = request.amount,
        "Transfer request received"
    );

    Ok(Json(request))
}
