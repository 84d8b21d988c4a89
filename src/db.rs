//! Per-guild account store management.
//!
//! Each guild gets its own `SQLite` file under `<data_dir>/guilds/`, opened
//! lazily on the first account interaction in that guild and cached for the
//! lifetime of the process. Table creation uses `SeaORM`'s schema generation
//! from the entity definitions, so reopening an existing store is safe.

use crate::entities::Account;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Registry of lazily opened per-guild account stores.
#[derive(Debug)]
pub struct GuildStores {
    guilds_dir: PathBuf,
    connections: RwLock<HashMap<u64, DatabaseConnection>>,
}

impl GuildStores {
    /// Creates a registry rooted at `<data_dir>/guilds`. No files are touched
    /// until a guild's store is first requested.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            guilds_dir: data_dir.as_ref().join("guilds"),
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the connection for `guild_id`, opening (and creating) the
    /// store file on first use.
    #[instrument(skip(self))]
    pub async fn get(&self, guild_id: u64) -> Result<DatabaseConnection> {
        if let Some(db) = self.connections.read().await.get(&guild_id) {
            return Ok(db.clone());
        }

        let mut connections = self.connections.write().await;
        // Another task may have opened the store while we waited for the lock
        if let Some(db) = connections.get(&guild_id) {
            return Ok(db.clone());
        }

        std::fs::create_dir_all(&self.guilds_dir)?;
        let path = self.guilds_dir.join(format!("{guild_id}.sqlite"));
        let url = format!("sqlite://{}?mode=rwc", path.display());
        debug!(guild_id, %url, "Opening guild account store");

        let db = Database::connect(&url).await?;
        create_tables(&db).await?;
        connections.insert(guild_id, db.clone());
        Ok(db)
    }
}

/// Creates the account table using `SeaORM`'s schema generation from the
/// entity definition. Idempotent, so it runs on every store open.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut account_table = schema.create_table_from_entity(Account);
    account_table.if_not_exists();
    db.execute(builder.build(&account_table)).await?;

    Ok(())
}
