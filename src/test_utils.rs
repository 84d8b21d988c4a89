//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test accounts with sensible defaults.

use crate::{core::account, db, entities, errors::Result};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with the account table initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    db::create_tables(&db).await?;
    Ok(db)
}

/// Registers a test account through the real registration path, so the stored
/// hash is a genuine salted argon2 encoding.
pub async fn create_test_account(
    db: &DatabaseConnection,
    user_id: &str,
    password: &str,
) -> Result<entities::account::Model> {
    account::register(db, user_id, password).await
}
