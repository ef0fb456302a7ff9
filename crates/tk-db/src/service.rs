//! Service layer: the handle every repository method hangs off.
//!
//! `TaskService` wraps `TkDb`. All repo methods are implemented as
//! `impl TaskService` blocks under `repos/`.

use crate::TkDb;
use crate::error::DatabaseError;

pub struct TaskService {
    db: TkDb,
}

impl TaskService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TkDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `TkDb`.
    #[must_use]
    pub const fn from_db(db: TkDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TkDb {
        &self.db
    }
}
