//! Task repository: CRUD, name search, and the write-through half of the
//! status engine.
//!
//! Status derivation itself is pure (`tk_core::status`). The methods here load
//! and persist the result, writing only when something changed.

use chrono::{DateTime, NaiveDate, Utc};

use tk_core::entities::{NewTask, Task};
use tk_core::enums::EntityType;
use tk_core::errors::{validate_deadline, validate_name};
use tk_core::ids::PREFIX_TASK;
use tk_core::page::{ListQuery, Page};
use tk_core::status::derive_status;

use crate::error::DatabaseError;
use crate::helpers::{
    count_matching, format_date, get_opt_string, parse_date, parse_enum,
    parse_optional_datetime, require_exists, split_ids,
};
use crate::service::TaskService;
use crate::updates::task::TaskUpdate;

pub(crate) const SELECT_COLS: &str = "t.id, t.name, t.description, t.deadline, t.status, \
     t.is_completed, t.time_completed, t.priority, t.task_type_id, \
     (SELECT group_concat(a.worker_id) FROM task_assignees a WHERE a.task_id = t.id)";

pub(crate) fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        deadline: parse_date(&row.get::<String>(3)?)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        is_completed: row.get::<i64>(5)? != 0,
        time_completed: parse_optional_datetime(get_opt_string(row, 6)?.as_deref())?,
        priority: parse_enum(&row.get::<String>(7)?)?,
        task_type_id: row.get(8)?,
        assignees: split_ids(get_opt_string(row, 9)?.as_deref()),
    })
}

impl TaskService {
    /// Create a task.
    ///
    /// The deadline is checked against `today` here and nowhere else; later
    /// edits may move it into the past.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank name or a past deadline, `NotFound`
    /// for an unknown task type or assignee, or the underlying store error.
    pub async fn create_task(&self, new: NewTask, today: NaiveDate) -> Result<Task, DatabaseError> {
        validate_name("name", &new.name)?;
        validate_deadline(new.deadline, today)?;
        require_exists(self.db().conn(), EntityType::TaskType, &new.task_type_id).await?;

        let mut assignees = new.assignees;
        assignees.sort();
        assignees.dedup();
        for worker_id in &assignees {
            require_exists(self.db().conn(), EntityType::Worker, worker_id).await?;
        }

        let id = self.db().generate_id(PREFIX_TASK).await?;
        let status = derive_status(new.deadline, None, today);
        let now = Utc::now();

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO tasks (id, name, description, deadline, status, is_completed, \
             time_completed, priority, task_type_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, 0, NULL, ?6, ?7)",
            libsql::params![
                id.as_str(),
                new.name.as_str(),
                new.description.as_str(),
                format_date(new.deadline),
                status.as_str(),
                new.priority.as_str(),
                new.task_type_id.as_str()
            ],
        )
        .await?;
        for worker_id in &assignees {
            tx.execute(
                "INSERT OR IGNORE INTO task_assignees (worker_id, task_id, created_at) \
                 VALUES (?1, ?2, ?3)",
                libsql::params![worker_id.as_str(), id.as_str(), now.to_rfc3339()],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::debug!(task_id = %id, deadline = %new.deadline, "task created");

        Ok(Task {
            id,
            name: new.name,
            description: new.description,
            deadline: new.deadline,
            status,
            is_completed: false,
            time_completed: None,
            priority: new.priority,
            task_type_id: new.task_type_id,
            assignees,
        })
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks t WHERE t.id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Task, id))?;
        row_to_task(&row)
    }

    /// Update editable fields. Status is left alone; the next
    /// [`Self::task_detail`] or [`Self::refresh_status`] re-derives it.
    pub async fn update_task(&self, task_id: &str, update: TaskUpdate) -> Result<Task, DatabaseError> {
        if update.is_empty() {
            return self.get_task(task_id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            validate_name("name", name)?;
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().into());
            idx += 1;
        }
        if let Some(deadline) = update.deadline {
            sets.push(format!("deadline = ?{idx}"));
            params.push(format_date(deadline).into());
            idx += 1;
        }
        if let Some(priority) = update.priority {
            sets.push(format!("priority = ?{idx}"));
            params.push(priority.as_str().into());
            idx += 1;
        }
        if let Some(ref task_type_id) = update.task_type_id {
            require_exists(self.db().conn(), EntityType::TaskType, task_type_id).await?;
            sets.push(format!("task_type_id = ?{idx}"));
            params.push(task_type_id.clone().into());
            idx += 1;
        }

        params.push(task_id.into());
        let sql = format!("UPDATE tasks SET {} WHERE id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Task, task_id));
        }

        self.get_task(task_id).await
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", [task_id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Task, task_id));
        }
        tracing::info!(task_id, "task deleted");
        Ok(())
    }

    /// List tasks ordered by deadline, filtered by a case-insensitive name substring.
    pub async fn list_tasks(&self, query: &ListQuery) -> Result<Page<Task>, DatabaseError> {
        let term = query.term().unwrap_or_default();
        let total = count_matching(self.db().conn(), "tasks", "name", term).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks t \
                     WHERE instr(lower(t.name), lower(?1)) > 0 \
                     ORDER BY t.deadline, t.rowid LIMIT {} OFFSET {}",
                    query.effective_page_size(),
                    query.offset()
                ),
                [term],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(Page::new(tasks, query, total))
    }

    /// Re-derive a task's status for `today`, writing it back only if it changed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the task row vanished before the write, or the
    /// underlying store error.
    pub async fn refresh_status(&self, mut task: Task, today: NaiveDate) -> Result<Task, DatabaseError> {
        let previous = task.status;
        if !task.refresh_status(today) {
            return Ok(task);
        }

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1, is_completed = ?2 WHERE id = ?3",
                libsql::params![
                    task.status.as_str(),
                    i64::from(task.is_completed),
                    task.id.as_str()
                ],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Task, task.id));
        }

        tracing::debug!(
            task_id = %task.id,
            from = previous.as_str(),
            to = task.status.as_str(),
            "task status refreshed"
        );
        Ok(task)
    }

    /// Mark a task completed at `now` and persist the derived status.
    ///
    /// Finishing twice is allowed; the later timestamp wins.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the task row vanished, or the underlying store error.
    pub async fn finish_task(&self, mut task: Task, now: DateTime<Utc>) -> Result<Task, DatabaseError> {
        task.finish(now);

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET is_completed = 1, time_completed = ?1, status = ?2 WHERE id = ?3",
                libsql::params![now.to_rfc3339(), task.status.as_str(), task.id.as_str()],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Task, task.id));
        }

        tracing::info!(task_id = %task.id, status = task.status.as_str(), "task finished");
        Ok(task)
    }

    /// Load a task for detail display, refreshing its status first.
    pub async fn task_detail(&self, task_id: &str, today: NaiveDate) -> Result<Task, DatabaseError> {
        let task = self.get_task(task_id).await?;
        self.refresh_status(task, today).await
    }
}
