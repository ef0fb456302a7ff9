//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements are idempotent (`IF NOT EXISTS`,
//! `INSERT OR IGNORE`) so re-running is safe.

use crate::TkDb;
use crate::error::DatabaseError;

/// Initial schema: 5 tables, 5 indexes, default position seed.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl TkDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
