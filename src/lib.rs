//! Account Management API
//!
//! A REST service for creating, reading, updating and deleting account
//! records (name, email, phone) stored in a single SQLite table.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx (async queries)
//! - **Format**: JSON requests/responses
//!
//! Handlers depend on the [`repository::AccountRepository`] trait carried in
//! [`AppState`], so tests can swap the SQLite store for a stub.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod shutdown;

use std::sync::Arc;

use repository::AccountRepository;

/// Shared state handed to every handler via `State` extraction.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn AccountRepository>,
}

impl AppState {
    pub fn new(accounts: impl AccountRepository + 'static) -> Self {
        Self {
            accounts: Arc::new(accounts),
        }
    }
}
