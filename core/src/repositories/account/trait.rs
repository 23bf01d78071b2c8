//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// Implementations handle the actual storage while keeping the domain layer
/// free of database concerns. The storage layer must enforce email
/// uniqueness: two concurrent `create` calls with the same email must not
/// both succeed, and the loser must surface `DomainError::Conflict`.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Create a new account
    ///
    /// Fails with `DomainError::Conflict` if the email is already taken,
    /// backed by a storage-level uniqueness constraint.
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account (idempotent full-record write)
    async fn update(&self, account: Account) -> Result<Account, DomainError>;
}
