//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts - List all accounts
//! - GET /api/v1/accounts/{id} - Get account by ID
//! - PUT /api/v1/accounts/{id} - Replace an account's fields
//! - DELETE /api/v1/accounts/{id} - Delete an account
//!
//! Bodies and path ids are extracted as `Result`s so that rejections become
//! `AppError` responses with a JSON body before the repository is touched.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::AppError,
    models::account::{Account, AccountRequest},
};

/// Parse the `{id}` path segment.
///
/// Anything that is not an optionally signed run of digits is a client error.
/// An integer too large for `i64` is well-formed but cannot name a stored
/// row, so it is reported as not found.
fn parse_account_id(raw: &str) -> Result<i64, AppError> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation("Invalid account id".to_string()));
    }

    raw.parse::<i64>().map_err(|_| AppError::NotFound)
}

/// Create a new account.
///
/// # Endpoint
///
/// `POST /api/v1/accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com",
///   "phone": "123-456-7890"  // optional
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created account
/// - **Error (400)**: Missing name/email, invalid email, malformed JSON
/// - **Error (409)**: Email already used by another account
pub async fn create_account(
    State(state): State<AppState>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), AppError> {
    let Json(request) = payload?;
    let fields = request.validate()?;

    let account = state.accounts.create(&fields).await?;
    tracing::info!(account_id = account.id, "account created");

    Ok((StatusCode::CREATED, Json(account)))
}

/// Get a specific account by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (400)**: `{id}` is not an integer
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Account>, AppError> {
    let id = parse_account_id(&id?.0)?;

    let account = state.accounts.get(id).await?;

    Ok(Json(account))
}

/// List all accounts.
///
/// # Endpoint
///
/// `GET /api/v1/accounts`
///
/// # Response
///
/// - **Success (200 OK)**: Returns array of accounts (may be empty)
///
/// # Ordering
///
/// Accounts are returned in ascending id order, i.e. oldest first.
pub async fn list_accounts(State(state): State<AppState>) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.accounts.list().await?;

    Ok(Json(accounts))
}

/// Replace an account's name, email and phone.
///
/// # Endpoint
///
/// `PUT /api/v1/accounts/{id}`
///
/// The body follows the same rules as create and fully replaces the stored
/// values; omitting `phone` clears it.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the updated account
/// - **Error (400)**: Invalid body or non-integer id
/// - **Error (404)**: Account not found
/// - **Error (409)**: Email already used by another account
pub async fn update_account(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<AccountRequest>, JsonRejection>,
) -> Result<Json<Account>, AppError> {
    let id = parse_account_id(&id?.0)?;
    let Json(request) = payload?;
    let fields = request.validate()?;

    let account = state.accounts.update(id, &fields).await?;
    tracing::info!(account_id = account.id, "account updated");

    Ok(Json(account))
}

/// Delete an account.
///
/// # Endpoint
///
/// `DELETE /api/v1/accounts/{id}`
///
/// # Response (200 OK)
///
/// ```json
/// { "message": "Account deleted successfully" }
/// ```
///
/// A second delete of the same id returns 404.
pub async fn delete_account(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = parse_account_id(&id?.0)?;

    state.accounts.delete(id).await?;
    tracing::info!(account_id = id, "account deleted");

    Ok(Json(json!({ "message": "Account deleted successfully" })))
}
