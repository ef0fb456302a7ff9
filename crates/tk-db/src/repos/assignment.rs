//! Worker ↔ task assignment relation.
//!
//! The relation is a set of `(worker_id, task_id)` pairs with a composite
//! primary key, so a pair can never be stored twice.

use chrono::Utc;

use tk_core::entities::{Assignment, Task, Worker};
use tk_core::enums::{AssignmentState, EntityType};

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, require_exists};
use crate::repos::task::{SELECT_COLS as TASK_COLS, row_to_task};
use crate::repos::worker::{SELECT_COLS as WORKER_COLS, row_to_worker};
use crate::service::TaskService;

fn row_to_assignment(row: &libsql::Row) -> Result<Assignment, DatabaseError> {
    Ok(Assignment {
        worker_id: row.get(0)?,
        task_id: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl TaskService {
    /// Flip membership of `worker_id` in the task's assignee set.
    ///
    /// Returns the state after the toggle. Calling it twice restores the
    /// previous set.
    ///
    /// Two concurrent toggles of the same pair are not serialized against each
    /// other: the delete-then-insert below is two statements, so the outcome
    /// is whichever write lands last. The primary key keeps the set free of
    /// duplicates either way.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if either the worker or the task does not exist.
    pub async fn toggle_assignment(
        &self,
        worker_id: &str,
        task_id: &str,
    ) -> Result<AssignmentState, DatabaseError> {
        require_exists(self.db().conn(), EntityType::Worker, worker_id).await?;
        require_exists(self.db().conn(), EntityType::Task, task_id).await?;

        let removed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM task_assignees WHERE worker_id = ?1 AND task_id = ?2",
                [worker_id, task_id],
            )
            .await?;

        let state = if removed > 0 {
            AssignmentState::Unassigned
        } else {
            self.insert_assignment(worker_id, task_id).await?;
            AssignmentState::Assigned
        };

        tracing::info!(worker_id, task_id, state = state.as_str(), "assignment toggled");
        Ok(state)
    }

    /// Insert the pair only while both sides still exist.
    ///
    /// `OR IGNORE` does not cover foreign-key failures, so a worker or task
    /// deleted after the caller's existence check is caught by the `EXISTS`
    /// guard and reported as `NotFound`. Zero rows with both sides present
    /// means the pair is already stored.
    async fn insert_assignment(&self, worker_id: &str, task_id: &str) -> Result<(), DatabaseError> {
        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT OR IGNORE INTO task_assignees (worker_id, task_id, created_at) \
                 SELECT ?1, ?2, ?3 \
                 WHERE EXISTS (SELECT 1 FROM workers WHERE id = ?1) \
                   AND EXISTS (SELECT 1 FROM tasks WHERE id = ?2)",
                libsql::params![worker_id, task_id, Utc::now().to_rfc3339()],
            )
            .await?;
        if inserted == 0 {
            require_exists(self.db().conn(), EntityType::Worker, worker_id).await?;
            require_exists(self.db().conn(), EntityType::Task, task_id).await?;
        }
        Ok(())
    }

    /// Assignment rows of a task, ordered by worker ID.
    pub async fn assignments_of(&self, task_id: &str) -> Result<Vec<Assignment>, DatabaseError> {
        require_exists(self.db().conn(), EntityType::Task, task_id).await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT worker_id, task_id, created_at FROM task_assignees \
                 WHERE task_id = ?1 ORDER BY worker_id",
                [task_id],
            )
            .await?;

        let mut assignments = Vec::new();
        while let Some(row) = rows.next().await? {
            assignments.push(row_to_assignment(&row)?);
        }
        Ok(assignments)
    }

    /// Workers assigned to a task, ordered by username.
    pub async fn assignees_of(&self, task_id: &str) -> Result<Vec<Worker>, DatabaseError> {
        require_exists(self.db().conn(), EntityType::Task, task_id).await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {WORKER_COLS} FROM workers \
                     WHERE id IN (SELECT worker_id FROM task_assignees WHERE task_id = ?1) \
                     ORDER BY username"
                ),
                [task_id],
            )
            .await?;

        let mut workers = Vec::new();
        while let Some(row) = rows.next().await? {
            workers.push(row_to_worker(&row)?);
        }
        Ok(workers)
    }

    /// Tasks a worker is assigned to, ordered by deadline.
    pub async fn tasks_of(&self, worker_id: &str) -> Result<Vec<Task>, DatabaseError> {
        require_exists(self.db().conn(), EntityType::Worker, worker_id).await?;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {TASK_COLS} FROM tasks t \
                     WHERE t.id IN (SELECT task_id FROM task_assignees WHERE worker_id = ?1) \
                     ORDER BY t.deadline, t.rowid"
                ),
                [worker_id],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Replace a task's assignee set wholesale and return the stored rows.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown task or worker; nothing is changed
    /// in that case.
    pub async fn set_assignees(
        &self,
        task_id: &str,
        worker_ids: &[String],
    ) -> Result<Vec<Assignment>, DatabaseError> {
        require_exists(self.db().conn(), EntityType::Task, task_id).await?;
        let mut ids = worker_ids.to_vec();
        ids.sort();
        ids.dedup();
        for worker_id in &ids {
            require_exists(self.db().conn(), EntityType::Worker, worker_id).await?;
        }

        let now = Utc::now().to_rfc3339();
        let tx = self.db().conn().transaction().await?;
        tx.execute("DELETE FROM task_assignees WHERE task_id = ?1", [task_id])
            .await?;
        for worker_id in &ids {
            // rows for this task were just cleared, so zero means the worker vanished
            let inserted = tx
                .execute(
                    "INSERT INTO task_assignees (worker_id, task_id, created_at) \
                     SELECT ?1, ?2, ?3 WHERE EXISTS (SELECT 1 FROM workers WHERE id = ?1)",
                    libsql::params![worker_id.as_str(), task_id, now.as_str()],
                )
                .await?;
            if inserted == 0 {
                tx.rollback().await?;
                return Err(DatabaseError::not_found(EntityType::Worker, worker_id.as_str()));
            }
        }
        tx.commit().await?;

        tracing::debug!(task_id, count = ids.len(), "assignees replaced");
        self.assignments_of(task_id).await
    }
}
