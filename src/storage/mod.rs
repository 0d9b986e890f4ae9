//! Account persistence.
//!
//! Handlers only see the [`Storage`] trait. The server wires in
//! [`postgres::PostgresStorage`]; tests swap in [`memory::MemoryStorage`].

#[cfg(test)]
pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::AppError, models::account::Account};

/// Shared handle injected into the router state.
pub type SharedStorage = Arc<dyn Storage>;

/// Persistence operations for accounts.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist a new account and write the assigned id back into it.
    async fn create_account(&self, account: &mut Account) -> Result<(), AppError>;

    /// Mark the account as deleted. Succeeds even if no row has this id.
    async fn delete_account(&self, id: i32) -> Result<(), AppError>;

    /// Not implemented yet; always succeeds without touching the store.
    async fn update_account(&self, account: &Account) -> Result<(), AppError>;

    /// All accounts, soft-deleted ones included, in storage scan order.
    async fn get_accounts(&self) -> Result<Vec<Account>, AppError>;

    /// Fetch one account, soft-deleted or not.
    ///
    /// # Errors
    ///
    /// `AppError::AccountNotFound` if no row has this id.
    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError>;

    /// One round trip to the backend, for health checks.
    async fn ping(&self) -> Result<(), AppError>;
}
