//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Account model and request validation
pub mod account;
