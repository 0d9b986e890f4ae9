//! Transfer request type.

use serde::{Deserialize, Serialize};

/// Request to move money to another account.
///
/// # JSON Example
///
/// ```json
/// {
///   "toAccountID": 5,
///   "amount": 100
/// }
/// ```
///
/// The transfer endpoint only decodes and echoes this value. No balance is
/// read or written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransferRequest {
    /// Destination account id
    #[serde(rename = "toAccountID")]
    pub to_account_id: i32,

    /// Amount in the account's smallest unit
    pub amount: i64,
}
