//! SQLite-backed [`AccountRepository`].
//!
//! Every write is a single statement, so the UNIQUE constraint on `email`
//! is checked in the same step that inserts or updates the row. There is no
//! read-then-write window for two writers to race through.

use async_trait::async_trait;
use chrono::Utc;

use super::AccountRepository;
use crate::{
    db::DbPool,
    error::AppError,
    models::account::{Account, AccountFields},
};

/// Translate a constraint violation into a conflict, pass anything else through.
fn map_write_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict("Email already exists".to_string())
        }
        other => AppError::Database(other),
    }
}

#[derive(Debug, Clone)]
pub struct SqliteAccountRepository {
    pool: DbPool,
}

impl SqliteAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn create(&self, fields: &AccountFields) -> Result<Account, AppError> {
        let now = Utc::now();

        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, phone, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(fields.name())
        .bind(fields.email())
        .bind(fields.phone())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn get(&self, id: i64) -> Result<Account, AppError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, phone, created_at, updated_at
            FROM accounts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, phone, created_at, updated_at
            FROM accounts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn update(&self, id: i64, fields: &AccountFields) -> Result<Account, AppError> {
        // Full replace: a missing phone clears the stored one.
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = ?, email = ?, phone = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, email, phone, created_at, updated_at
            "#,
        )
        .bind(fields.name())
        .bind(fields.email())
        .bind(fields.phone())
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?
        .ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let deleted = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
