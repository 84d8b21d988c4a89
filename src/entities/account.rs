//! Account entity - one row per registered user in a guild store.
//!
//! The table keeps the legacy camelCase column names (`userId`,
//! `hashedPassword`) so existing guild store files stay readable.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Discord user id, unique within the guild store
    #[sea_orm(primary_key, auto_increment = false, column_name = "userId")]
    pub user_id: String,
    /// Salted argon2 encoded hash of the user's password
    #[sea_orm(column_name = "hashedPassword")]
    pub hashed_password: String,
}

/// Accounts have no relations; each guild store is a single table.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
