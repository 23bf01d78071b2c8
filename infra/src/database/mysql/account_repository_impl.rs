//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use mailauth_core::domain::entities::{Account, OtpSlot};
use mailauth_core::errors::DomainError;
use mailauth_core::repositories::AccountRepository;

/// MySQL code for a unique-key violation
const ER_DUP_ENTRY: &str = "1062";

/// MySQL implementation of AccountRepository
///
/// The `accounts.email` column carries a unique index, so a concurrent
/// duplicate registration surfaces from `create` as a Conflict rather
/// than a second row.
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;

        let verify_code: Option<String> = row
            .try_get("verify_otp")
            .map_err(|e| DomainError::internal(format!("Failed to get verify_otp: {}", e)))?;
        let verify_expires: Option<DateTime<Utc>> = row
            .try_get("verify_otp_expires_at")
            .map_err(|e| {
                DomainError::internal(format!("Failed to get verify_otp_expires_at: {}", e))
            })?;

        let reset_code: Option<String> = row
            .try_get("reset_otp")
            .map_err(|e| DomainError::internal(format!("Failed to get reset_otp: {}", e)))?;
        let reset_expires: Option<DateTime<Utc>> = row
            .try_get("reset_otp_expires_at")
            .map_err(|e| {
                DomainError::internal(format!("Failed to get reset_otp_expires_at: {}", e))
            })?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            password_hash: row.try_get("password_hash").map_err(|e| {
                DomainError::internal(format!("Failed to get password_hash: {}", e))
            })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::internal(format!("Failed to get is_verified: {}", e)))?,
            verify_otp: OtpSlot::from_parts(verify_code, verify_expires),
            reset_otp: OtpSlot::from_parts(reset_code, reset_expires),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    /// Map a write error, turning a unique-key violation into Conflict
    fn map_write_error(e: sqlx::Error) -> DomainError {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err
                .code()
                .map(|c| c == ER_DUP_ENTRY)
                .unwrap_or(false)
            {
                return DomainError::conflict("User already exists");
            }
        }
        DomainError::internal(format!("Database write failed: {}", e))
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, name, password_hash, is_verified,
                   verify_otp, verify_otp_expires_at,
                   reset_otp, reset_otp_expires_at,
                   created_at, updated_at
            FROM accounts
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, email, name, password_hash, is_verified,
                   verify_otp, verify_otp_expires_at,
                   reset_otp, reset_otp_expires_at,
                   created_at, updated_at
            FROM accounts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, email, name, password_hash, is_verified,
                verify_otp, verify_otp_expires_at,
                reset_otp, reset_otp_expires_at,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.name)
            .bind(&account.password_hash)
            .bind(account.is_verified)
            .bind(&account.verify_otp.code)
            .bind(account.verify_otp.expires_at)
            .bind(&account.reset_otp.code)
            .bind(account.reset_otp.expires_at)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(Self::map_write_error)?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts SET
                name = ?,
                password_hash = ?,
                is_verified = ?,
                verify_otp = ?,
                verify_otp_expires_at = ?,
                reset_otp = ?,
                reset_otp_expires_at = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.name)
            .bind(&account.password_hash)
            .bind(account.is_verified)
            .bind(&account.verify_otp.code)
            .bind(account.verify_otp.expires_at)
            .bind(&account.reset_otp.code)
            .bind(account.reset_otp.expires_at)
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(Self::map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        Ok(account)
    }
}
