//! Shared test utilities for tk-db unit tests.

use chrono::NaiveDate;
use tk_core::entities::{NewTask, NewWorker, Position, Task, TaskType, Worker};
use tk_core::enums::Priority;

use crate::service::TaskService;

/// Create an in-memory `TaskService`.
pub async fn test_service() -> TaskService {
    TaskService::new_local(":memory:").await.unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A fixed "today" so deadline validation never depends on the wall clock.
pub fn today() -> NaiveDate {
    date(2023, 11, 1)
}

pub async fn make_position(svc: &TaskService, name: &str) -> Position {
    svc.create_position(name).await.unwrap()
}

pub async fn make_task_type(svc: &TaskService, name: &str) -> TaskType {
    svc.create_task_type(name).await.unwrap()
}

pub async fn make_worker(svc: &TaskService, username: &str) -> Worker {
    svc.create_worker(NewWorker {
        username: username.to_string(),
        first_name: format!("{username}first"),
        last_name: format!("{username}last"),
        ..Default::default()
    })
    .await
    .unwrap()
}

pub fn new_task(name: &str, deadline: NaiveDate, task_type_id: &str) -> NewTask {
    NewTask {
        name: name.to_string(),
        description: format!("{name} description"),
        deadline,
        priority: Priority::Low,
        task_type_id: task_type_id.to_string(),
        assignees: Vec::new(),
    }
}

/// Create a task due on `deadline` under a fresh task type.
pub async fn make_task(svc: &TaskService, name: &str, deadline: NaiveDate) -> Task {
    let task_type = make_task_type(svc, "General").await;
    svc.create_task(new_task(name, deadline, &task_type.id), today())
        .await
        .unwrap()
}
