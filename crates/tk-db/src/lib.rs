//! # tk-db
//!
//! libSQL entity store for the task tracker.
//!
//! Holds positions, task types, workers, tasks, and the worker ↔ task
//! assignment relation. On top of plain CRUD it hosts the write-through side
//! of the task status engine (`refresh_status`, `finish_task`) and the
//! assignment toggle.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and connection and provides ID generation.
pub struct TkDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TkDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let tk_db = Self { db, conn };
        tk_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(tk_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tsk-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> TkDb {
        TkDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = ["positions", "task_types", "workers", "tasks", "task_assignees"];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn default_position_is_seeded() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM positions WHERE id = ?1",
                [tk_core::ids::DEFAULT_POSITION_ID],
            )
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(
            row.get::<String>(0).unwrap(),
            tk_core::ids::DEFAULT_POSITION_NAME
        );
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("tsk").await.unwrap();
        assert!(id.starts_with("tsk-"), "ID should start with 'tsk-': {id}");
        assert_eq!(id.len(), 12, "ID should be 12 chars: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in tk_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn status_check_constraint_rejects_unknown_code() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO task_types (id, name) VALUES ('typ-1', 'Bug')", ())
            .await
            .unwrap();
        let result = db
            .conn()
            .execute(
                "INSERT INTO tasks (id, name, deadline, status, task_type_id) VALUES ('tsk-1', 'x', '2030-01-01', 'done', 'typ-1')",
                (),
            )
            .await;
        assert!(result.is_err(), "unknown status code should be rejected");
    }

    #[tokio::test]
    async fn assignment_primary_key_rejects_duplicates() {
        let db = test_db().await;
        db.conn()
            .execute_batch(
                "INSERT INTO task_types (id, name) VALUES ('typ-1', 'Bug');
                 INSERT INTO tasks (id, name, deadline, task_type_id) VALUES ('tsk-1', 'x', '2030-01-01', 'typ-1');
                 INSERT INTO workers (id, username) VALUES ('wrk-1', 'user1');
                 INSERT INTO task_assignees (worker_id, task_id) VALUES ('wrk-1', 'tsk-1');",
            )
            .await
            .unwrap();
        let result = db
            .conn()
            .execute(
                "INSERT INTO task_assignees (worker_id, task_id) VALUES ('wrk-1', 'tsk-1')",
                (),
            )
            .await;
        assert!(result.is_err());
    }
}
