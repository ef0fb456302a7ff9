//! Task type repository.

use tk_core::entities::TaskType;
use tk_core::enums::EntityType;
use tk_core::errors::validate_name;
use tk_core::ids::PREFIX_TASK_TYPE;
use tk_core::page::{ListQuery, Page};

use crate::error::DatabaseError;
use crate::helpers::count_matching;
use crate::service::TaskService;

fn row_to_task_type(row: &libsql::Row) -> Result<TaskType, DatabaseError> {
    Ok(TaskType {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

impl TaskService {
    pub async fn create_task_type(&self, name: &str) -> Result<TaskType, DatabaseError> {
        validate_name("name", name)?;
        let id = self.db().generate_id(PREFIX_TASK_TYPE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO task_types (id, name) VALUES (?1, ?2)",
                libsql::params![id.as_str(), name],
            )
            .await?;

        Ok(TaskType {
            id,
            name: name.to_string(),
        })
    }

    pub async fn get_task_type(&self, id: &str) -> Result<TaskType, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name FROM task_types WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::TaskType, id))?;
        row_to_task_type(&row)
    }

    pub async fn rename_task_type(&self, id: &str, name: &str) -> Result<TaskType, DatabaseError> {
        validate_name("name", name)?;
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE task_types SET name = ?1 WHERE id = ?2",
                libsql::params![name, id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::TaskType, id));
        }
        Ok(TaskType {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    /// Delete a task type together with every task of that type.
    pub async fn delete_task_type(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM task_types WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::TaskType, id));
        }
        tracing::info!(task_type_id = id, "task type deleted");
        Ok(())
    }

    pub async fn list_task_types(&self, query: &ListQuery) -> Result<Page<TaskType>, DatabaseError> {
        let term = query.term().unwrap_or_default();
        let total = count_matching(self.db().conn(), "task_types", "name", term).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT id, name FROM task_types \
                     WHERE instr(lower(name), lower(?1)) > 0 \
                     ORDER BY name, rowid LIMIT {} OFFSET {}",
                    query.effective_page_size(),
                    query.offset()
                ),
                [term],
            )
            .await?;

        let mut task_types = Vec::new();
        while let Some(row) = rows.next().await? {
            task_types.push(row_to_task_type(&row)?);
        }
        Ok(Page::new(task_types, query, total))
    }
}
