//! Account data models and API request types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account, also the response body
//! - `AccountRequest`: Request body for creating and updating accounts
//! - `AccountFields`: The validated field set the repository writes

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Column length limits.
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 120;
pub const MAX_PHONE_LEN: usize = 20;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. `id` is assigned by SQLite on insert and
/// never reused after a delete; `email` carries a UNIQUE constraint.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "John Doe",
///   "email": "john@example.com",
///   "phone": "123-456-7890",
///   "created_at": "2025-12-20T10:00:00Z",
///   "updated_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: i64,

    pub name: String,

    /// Unique across all accounts
    pub email: String,

    pub phone: Option<String>,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of last update
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /api/v1/accounts` and `PUT /api/v1/accounts/{id}`.
///
/// Every field is optional here so that a missing or `null` field is reported
/// by [`AccountRequest::validate`] instead of as a deserialization failure.
/// Unknown fields, including a client-supplied `id`, are ignored.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "phone": "123-456-7890"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AccountRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl AccountRequest {
    /// Check the body against the field rules, consuming it.
    pub fn validate(self) -> Result<AccountFields, AppError> {
        match (self.name, self.email) {
            (Some(name), Some(email)) => AccountFields::new(name, email, self.phone),
            _ => Err(AppError::Validation(
                "Name and email are required".to_string(),
            )),
        }
    }
}

/// Mutable account fields that have passed validation.
///
/// The only constructor is [`AccountFields::new`], so anything the
/// repository receives has already been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFields {
    name: String,
    email: String,
    phone: Option<String>,
}

impl AccountFields {
    /// Validate and normalize (trim) the given values.
    ///
    /// # Validation
    ///
    /// - `name`: non-blank, at most 100 characters
    /// - `email`: `local@domain.tld` shape, at most 120 characters
    /// - `phone`: optional, at most 20 characters
    pub fn new(name: String, email: String, phone: Option<String>) -> Result<Self, AppError> {
        let name = name.trim().to_string();
        let email = email.trim().to_string();
        let phone = phone.map(|p| p.trim().to_string());

        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::Validation(format!(
                "Name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(AppError::Validation(format!(
                "Email must be at most {MAX_EMAIL_LEN} characters"
            )));
        }
        if !EMAIL_PATTERN.is_match(&email) {
            return Err(AppError::Validation("Invalid email address".to_string()));
        }
        if let Some(ref phone) = phone {
            if phone.chars().count() > MAX_PHONE_LEN {
                return Err(AppError::Validation(format!(
                    "Phone must be at most {MAX_PHONE_LEN} characters"
                )));
            }
        }

        Ok(Self { name, email, phone })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}
