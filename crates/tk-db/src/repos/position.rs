//! Position repository: CRUD + name search.

use tk_core::entities::Position;
use tk_core::enums::EntityType;
use tk_core::errors::validate_name;
use tk_core::ids::{DEFAULT_POSITION_ID, PREFIX_POSITION};
use tk_core::page::{ListQuery, Page};

use crate::error::DatabaseError;
use crate::helpers::{count_from_row, count_matching};
use crate::service::TaskService;

fn row_to_position(row: &libsql::Row) -> Result<Position, DatabaseError> {
    Ok(Position {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

impl TaskService {
    /// Create a position. Names are unique; a duplicate surfaces as the
    /// store's constraint error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the name is blank or the insert fails.
    pub async fn create_position(&self, name: &str) -> Result<Position, DatabaseError> {
        validate_name("name", name)?;
        let id = self.db().generate_id(PREFIX_POSITION).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO positions (id, name) VALUES (?1, ?2)",
                libsql::params![id.as_str(), name],
            )
            .await?;

        Ok(Position {
            id,
            name: name.to_string(),
        })
    }

    pub async fn get_position(&self, id: &str) -> Result<Position, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name FROM positions WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Position, id))?;
        row_to_position(&row)
    }

    pub async fn rename_position(&self, id: &str, name: &str) -> Result<Position, DatabaseError> {
        validate_name("name", name)?;
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE positions SET name = ?1 WHERE id = ?2",
                libsql::params![name, id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Position, id));
        }
        Ok(Position {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    /// Delete a position that no worker references.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for the default position or a
    /// position still held by workers, and `NotFound` if it does not exist.
    pub async fn delete_position(&self, id: &str) -> Result<(), DatabaseError> {
        if id == DEFAULT_POSITION_ID {
            return Err(DatabaseError::InvalidState(
                "the default position cannot be deleted".into(),
            ));
        }

        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM workers WHERE position_id = ?1", [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let holders = count_from_row(&row, 0)?;
        if holders > 0 {
            return Err(DatabaseError::InvalidState(format!(
                "position {id} is held by {holders} worker(s)"
            )));
        }

        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM positions WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Position, id));
        }
        tracing::info!(position_id = id, "position deleted");
        Ok(())
    }

    /// List positions ordered by name, filtered by a case-insensitive name substring.
    pub async fn list_positions(&self, query: &ListQuery) -> Result<Page<Position>, DatabaseError> {
        let term = query.term().unwrap_or_default();
        let total = count_matching(self.db().conn(), "positions", "name", term).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT id, name FROM positions \
                     WHERE instr(lower(name), lower(?1)) > 0 \
                     ORDER BY name, rowid LIMIT {} OFFSET {}",
                    query.effective_page_size(),
                    query.offset()
                ),
                [term],
            )
            .await?;

        let mut positions = Vec::new();
        while let Some(row) = rows.next().await? {
            positions.push(row_to_position(&row)?);
        }
        Ok(Page::new(positions, query, total))
    }
}
