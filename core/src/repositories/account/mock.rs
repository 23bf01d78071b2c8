//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// In-memory account repository for tests and local development
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        // Same uniqueness rule the real store enforces with an index
        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::conflict("User already exists"));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if !accounts.contains_key(&account.id) {
            return Err(DomainError::not_found("User"));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> Account {
        Account::new("Ann".to_string(), email.to_string(), "hash".to_string())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockAccountRepository::new();
        let created = repo.create(account("ann@x.com")).await.unwrap();

        let by_email = repo.find_by_email("ann@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = MockAccountRepository::new();
        repo.create(account("ann@x.com")).await.unwrap();

        let err = repo.create(account("ann@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_account() {
        let repo = MockAccountRepository::new();
        let err = repo.update(account("ghost@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
