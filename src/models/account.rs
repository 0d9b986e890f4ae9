//! Account data model and API request types.
//!
//! This module defines:
//! - `Account`: database entity, also returned as-is by the API
//! - `CreateAccountRequest`: request body for creating accounts

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) for randomly assigned account numbers.
pub const ACCOUNT_NUMBER_RANGE: i32 = 1_000_000;

/// Represents an account record from the `account` table.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "firstName": "Ada",
///   "lastName": "Lovelace",
///   "number": 482913,
///   "balance": 0,
///   "created_at": "2025-12-20T10:00:00Z",
///   "delete_account": false
/// }
/// ```
///
/// # Soft Delete
///
/// Deleting an account only sets `delete_account`. The row stays in the
/// table and keeps showing up in reads.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Store-assigned identifier, `0` until the account is persisted
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    /// Random customer-facing number in `[0, 1_000_000)`
    ///
    /// Not unique: nothing checks for collisions.
    pub number: i32,

    /// Current balance, zero at creation
    pub balance: i64,

    /// Creation time in UTC
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,

    /// Soft-delete flag
    #[serde(rename = "delete_account")]
    pub delete_account: bool,
}

impl Account {
    /// Build a new, not yet persisted account.
    ///
    /// The number is drawn at random, the balance starts at zero and
    /// `created_at` is the current UTC time. The id is left at `0` for the
    /// storage layer to fill in.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: rand::rng().random_range(0..ACCOUNT_NUMBER_RANGE),
            balance: 0,
            created_at: Utc::now(),
            delete_account: false,
        }
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "firstName": "Ada",
///   "lastName": "Lovelace"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}
