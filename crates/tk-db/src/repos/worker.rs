//! Worker repository: CRUD, username search, and the per-worker task split.

use tk_core::entities::{NewWorker, Worker};
use tk_core::enums::EntityType;
use tk_core::errors::validate_name;
use tk_core::ids::{DEFAULT_POSITION_ID, PREFIX_WORKER};
use tk_core::page::{ListQuery, Page};
use tk_core::responses::WorkerTasks;

use crate::error::DatabaseError;
use crate::helpers::{count_matching, get_opt_string, require_exists};
use crate::service::TaskService;
use crate::updates::worker::WorkerUpdate;

pub(crate) const SELECT_COLS: &str =
    "id, username, first_name, last_name, email, position_id, credentials";

pub(crate) fn row_to_worker(row: &libsql::Row) -> Result<Worker, DatabaseError> {
    Ok(Worker {
        id: row.get(0)?,
        username: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        email: row.get(4)?,
        position_id: row.get(5)?,
        credentials: get_opt_string(row, 6)?,
    })
}

impl TaskService {
    /// Create a worker. Without a position the worker gets the default one.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a blank username, `NotFound` for an unknown
    /// position, or the store's constraint error for a duplicate username.
    pub async fn create_worker(&self, new: NewWorker) -> Result<Worker, DatabaseError> {
        validate_name("username", &new.username)?;
        let position_id = new
            .position_id
            .unwrap_or_else(|| DEFAULT_POSITION_ID.to_string());
        require_exists(self.db().conn(), EntityType::Position, &position_id).await?;

        let id = self.db().generate_id(PREFIX_WORKER).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO workers ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    id.as_str(),
                    new.username.as_str(),
                    new.first_name.as_str(),
                    new.last_name.as_str(),
                    new.email.as_str(),
                    position_id.as_str(),
                    new.credentials.as_deref()
                ],
            )
            .await?;

        Ok(Worker {
            id,
            username: new.username,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            position_id,
            credentials: new.credentials,
        })
    }

    pub async fn get_worker(&self, id: &str) -> Result<Worker, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM workers WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Worker, id))?;
        row_to_worker(&row)
    }

    pub async fn get_worker_by_username(&self, username: &str) -> Result<Worker, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM workers WHERE username = ?1"),
                [username],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Worker, username))?;
        row_to_worker(&row)
    }

    pub async fn update_worker(
        &self,
        worker_id: &str,
        update: WorkerUpdate,
    ) -> Result<Worker, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref username) = update.username {
            validate_name("username", username)?;
            sets.push(format!("username = ?{idx}"));
            params.push(username.clone().into());
            idx += 1;
        }
        if let Some(ref first_name) = update.first_name {
            sets.push(format!("first_name = ?{idx}"));
            params.push(first_name.clone().into());
            idx += 1;
        }
        if let Some(ref last_name) = update.last_name {
            sets.push(format!("last_name = ?{idx}"));
            params.push(last_name.clone().into());
            idx += 1;
        }
        if let Some(ref email) = update.email {
            sets.push(format!("email = ?{idx}"));
            params.push(email.clone().into());
            idx += 1;
        }
        if let Some(ref position_id) = update.position_id {
            require_exists(self.db().conn(), EntityType::Position, position_id).await?;
            sets.push(format!("position_id = ?{idx}"));
            params.push(position_id.clone().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_worker(worker_id).await;
        }

        params.push(worker_id.into());
        let sql = format!("UPDATE workers SET {} WHERE id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Worker, worker_id));
        }

        self.get_worker(worker_id).await
    }

    /// Delete a worker. Their assignments go with them.
    pub async fn delete_worker(&self, worker_id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM workers WHERE id = ?1", [worker_id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Worker, worker_id));
        }
        tracing::info!(worker_id, "worker deleted");
        Ok(())
    }

    /// List workers ordered by username, filtered by a case-insensitive username substring.
    pub async fn list_workers(&self, query: &ListQuery) -> Result<Page<Worker>, DatabaseError> {
        let term = query.term().unwrap_or_default();
        let total = count_matching(self.db().conn(), "workers", "username", term).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM workers \
                     WHERE instr(lower(username), lower(?1)) > 0 \
                     ORDER BY username, rowid LIMIT {} OFFSET {}",
                    query.effective_page_size(),
                    query.offset()
                ),
                [term],
            )
            .await?;

        let mut workers = Vec::new();
        while let Some(row) = rows.next().await? {
            workers.push(row_to_worker(&row)?);
        }
        Ok(Page::new(workers, query, total))
    }

    /// A worker's assigned tasks, split into in-progress and completed.
    pub async fn worker_tasks(&self, worker_id: &str) -> Result<WorkerTasks, DatabaseError> {
        let worker = self.get_worker(worker_id).await?;
        let (completed, in_progress): (Vec<_>, Vec<_>) = self
            .tasks_of(worker_id)
            .await?
            .into_iter()
            .partition(|task| task.is_completed);
        Ok(WorkerTasks {
            worker,
            in_progress,
            completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{date, make_position, make_task, make_worker, test_service};
    use crate::updates::worker::WorkerUpdateBuilder;

    #[tokio::test]
    async fn create_worker_defaults_position() {
        let svc = test_service().await;
        let worker = make_worker(&svc, "user1").await;
        assert!(worker.id.starts_with("wrk-"));
        assert_eq!(worker.position_id, DEFAULT_POSITION_ID);
        assert_eq!(worker.to_string(), "user1 (user1first user1last)");
        assert_eq!(svc.get_worker(&worker.id).await.unwrap(), worker);
    }

    #[tokio::test]
    async fn create_worker_with_unknown_position_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .create_worker(NewWorker {
                username: "ghost".into(),
                position_id: Some("pos-missing".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn credentials_are_stored_but_opaque() {
        let svc = test_service().await;
        let worker = svc
            .create_worker(NewWorker {
                username: "secure".into(),
                credentials: Some("argon2$hash".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        let fetched = svc.get_worker(&worker.id).await.unwrap();
        assert_eq!(fetched.credentials.as_deref(), Some("argon2$hash"));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let svc = test_service().await;
        make_worker(&svc, "user1").await;
        let result = svc
            .create_worker(NewWorker {
                username: "user1".into(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn update_worker_partial() {
        let svc = test_service().await;
        let position = make_position(&svc, "Developer").await;
        let worker = make_worker(&svc, "user1").await;

        let updated = svc
            .update_worker(
                &worker.id,
                WorkerUpdateBuilder::new()
                    .email("user1@example.com")
                    .position_id(&position.id)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "user1@example.com");
        assert_eq!(updated.position_id, position.id);
        assert_eq!(updated.username, "user1");
    }

    #[tokio::test]
    async fn update_missing_worker_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .update_worker("wrk-missing", WorkerUpdateBuilder::new().email("x").build())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn lookup_by_username() {
        let svc = test_service().await;
        let worker = make_worker(&svc, "alice").await;
        assert_eq!(svc.get_worker_by_username("alice").await.unwrap().id, worker.id);
        assert!(svc.get_worker_by_username("bob").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn list_workers_searches_username() {
        let svc = test_service().await;
        for name in ["zoe", "Adam", "adele", "bob"] {
            make_worker(&svc, name).await;
        }

        let page = svc
            .list_workers(&ListQuery::default().search("AD"))
            .await
            .unwrap();
        let names: Vec<_> = page.items.iter().map(|w| w.username.as_str()).collect();
        assert_eq!(names, vec!["Adam", "adele"]);
    }

    #[tokio::test]
    async fn worker_tasks_split_by_completion() {
        let svc = test_service().await;
        let worker = make_worker(&svc, "user1").await;
        let open = make_task(&svc, "Open", date(2023, 12, 1)).await;
        let done = make_task(&svc, "Done", date(2023, 12, 1)).await;
        svc.toggle_assignment(&worker.id, &open.id).await.unwrap();
        svc.toggle_assignment(&worker.id, &done.id).await.unwrap();
        let done = svc.get_task(&done.id).await.unwrap();
        svc.finish_task(done, Utc.with_ymd_and_hms(2023, 11, 20, 9, 0, 0).unwrap())
            .await
            .unwrap();

        let split = svc.worker_tasks(&worker.id).await.unwrap();
        assert_eq!(split.in_progress.len(), 1);
        assert_eq!(split.in_progress[0].id, open.id);
        assert_eq!(split.completed.len(), 1);
        assert_eq!(split.completed[0].name, "Done");
    }

    #[tokio::test]
    async fn delete_worker_removes_assignments() {
        let svc = test_service().await;
        let worker = make_worker(&svc, "leaver").await;
        let task = make_task(&svc, "Handover", date(2023, 12, 1)).await;
        svc.toggle_assignment(&worker.id, &task.id).await.unwrap();

        svc.delete_worker(&worker.id).await.unwrap();
        assert!(svc.get_task(&task.id).await.unwrap().assignees.is_empty());
        assert!(svc.delete_worker(&worker.id).await.unwrap_err().is_not_found());
    }
}
