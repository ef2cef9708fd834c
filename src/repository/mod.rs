//! Data-access layer for accounts.
//!
//! Handlers only see the [`AccountRepository`] trait; the concrete store is
//! constructed at startup and injected through [`crate::AppState`].

mod sqlite;

pub use sqlite::SqliteAccountRepository;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::account::{Account, AccountFields},
};

/// The five account operations.
///
/// Implementations must enforce email uniqueness atomically with the write
/// itself and report a violation as [`AppError::Conflict`].
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account and return it with its assigned id.
    async fn create(&self, fields: &AccountFields) -> Result<Account, AppError>;

    /// Fetch one account, or [`AppError::NotFound`].
    async fn get(&self, id: i64) -> Result<Account, AppError>;

    /// All accounts in ascending id order.
    async fn list(&self) -> Result<Vec<Account>, AppError>;

    /// Replace every mutable field of an existing account.
    async fn update(&self, id: i64, fields: &AccountFields) -> Result<Account, AppError>;

    /// Permanently remove an account.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
