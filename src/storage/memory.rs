//! In-memory [`Storage`] used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::Storage;
use crate::{error::AppError, models::account::Account};

/// Vector-backed store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    accounts: Mutex<Vec<Account>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_account(&self, account: &mut Account) -> Result<(), AppError> {
        let mut accounts = self.accounts.lock().unwrap();
        account.id = accounts.last().map_or(1, |last| last.id + 1);
        accounts.push(account.clone());
        Ok(())
    }

    async fn delete_account(&self, id: i32) -> Result<(), AppError> {
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(account) = accounts.iter_mut().find(|a| a.id == id) {
            account.delete_account = true;
        }
        Ok(())
    }

    async fn update_account(&self, _account: &Account) -> Result<(), AppError> {
        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account, AppError> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppError::AccountNotFound(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential() {
        let storage = MemoryStorage::new();
        let mut a = Account::new("a", "a");
        let mut b = Account::new("b", "b");

        storage.create_account(&mut a).await.unwrap();
        storage.create_account(&mut b).await.unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(storage.get_accounts().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_leaves_account_untouched() {
        let storage = MemoryStorage::new();
        let mut account = Account::new("Ada", "Lovelace");
        storage.create_account(&mut account).await.unwrap();

        let mut changed = account.clone();
        changed.last_name = "Byron".to_string();
        storage.update_account(&changed).await.unwrap();

        assert_eq!(storage.get_account_by_id(account.id).await.unwrap(), account);
    }
}
