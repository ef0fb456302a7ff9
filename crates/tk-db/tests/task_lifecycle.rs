//! End-to-end lifecycle tests against an on-disk database.
//!
//! - Status refresh and completion across the deadline boundary
//! - Assignment toggling
//! - State surviving a reopen of the same file
//! - Cascades and guarded deletes

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use tk_core::entities::{NewTask, NewWorker, Task};
use tk_core::enums::{AssignmentState, Priority, TaskStatus};
use tk_core::ids::DEFAULT_POSITION_ID;
use tk_core::page::ListQuery;
use tk_db::service::TaskService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
}

async fn open(dir: &TempDir) -> TaskService {
    let path = dir.path().join("tasker.db");
    TaskService::new_local(path.to_str().unwrap()).await.unwrap()
}

async fn seed_task(svc: &TaskService, name: &str) -> Task {
    let task_type = svc.create_task_type("Bug").await.unwrap();
    svc.create_task(
        NewTask {
            name: name.to_string(),
            description: "Investigate and fix".to_string(),
            deadline: date(2023, 11, 20),
            priority: Priority::High,
            task_type_id: task_type.id,
            assignees: Vec::new(),
        },
        date(2023, 11, 1),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Status engine
// ---------------------------------------------------------------------------

#[tokio::test]
async fn overdue_open_task_becomes_ipad() {
    let dir = TempDir::new().unwrap();
    let svc = open(&dir).await;
    let task = seed_task(&svc, "Crash on login").await;

    let task = svc.refresh_status(task, date(2023, 11, 25)).await.unwrap();
    assert_eq!(task.status, TaskStatus::InProgressAfterDeadline);
    assert!(!task.is_completed);
}

#[tokio::test]
async fn finished_before_deadline_is_cot() {
    let dir = TempDir::new().unwrap();
    let svc = open(&dir).await;
    let task = seed_task(&svc, "Crash on login").await;

    let task = svc.finish_task(task, at(2023, 11, 18)).await.unwrap();
    assert_eq!(task.status, TaskStatus::CompletedOnTime);
    assert!(task.is_completed);
}

#[tokio::test]
async fn finished_after_deadline_is_cad() {
    let dir = TempDir::new().unwrap();
    let svc = open(&dir).await;
    let task = seed_task(&svc, "Crash on login").await;

    let task = svc.finish_task(task, at(2023, 11, 25)).await.unwrap();
    assert_eq!(task.status, TaskStatus::CompletedAfterDeadline);
    assert_eq!(task.time_completed, Some(at(2023, 11, 25)));
}

#[tokio::test]
async fn overdue_task_finished_late_stays_cad_on_refresh() {
    let dir = TempDir::new().unwrap();
    let svc = open(&dir).await;
    let task = seed_task(&svc, "Slipped").await;

    let task = svc.refresh_status(task, date(2023, 11, 22)).await.unwrap();
    assert_eq!(task.status, TaskStatus::InProgressAfterDeadline);
    let task = svc.finish_task(task, at(2023, 11, 23)).await.unwrap();
    let task = svc.task_detail(&task.id, date(2024, 1, 1)).await.unwrap();
    assert_eq!(task.status, TaskStatus::CompletedAfterDeadline);
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_assignment_round_trip() {
    let dir = TempDir::new().unwrap();
    let svc = open(&dir).await;
    let task = seed_task(&svc, "Pairing").await;
    let worker = svc
        .create_worker(NewWorker {
            username: "jdoe".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    let state = svc.toggle_assignment(&worker.id, &task.id).await.unwrap();
    assert_eq!(state, AssignmentState::Assigned);
    let task_now = svc.get_task(&task.id).await.unwrap();
    assert!(task_now.assignees.contains(&worker.id));

    let state = svc.toggle_assignment(&worker.id, &task.id).await.unwrap();
    assert_eq!(state, AssignmentState::Unassigned);
    let task_now = svc.get_task(&task.id).await.unwrap();
    assert!(!task_now.assignees.contains(&worker.id));
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[tokio::test]
async fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let (task_id, worker_id) = {
        let svc = open(&dir).await;
        let task = seed_task(&svc, "Durable").await;
        let worker = svc
            .create_worker(NewWorker {
                username: "keeper".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        svc.toggle_assignment(&worker.id, &task.id).await.unwrap();
        svc.finish_task(task.clone(), at(2023, 11, 19)).await.unwrap();
        (task.id, worker.id)
    };

    let svc = open(&dir).await;
    let task = svc.get_task(&task_id).await.unwrap();
    assert_eq!(task.status, TaskStatus::CompletedOnTime);
    assert_eq!(task.time_completed, Some(at(2023, 11, 19)));
    assert_eq!(task.assignees, vec![worker_id.clone()]);

    let split = svc.worker_tasks(&worker_id).await.unwrap();
    assert!(split.in_progress.is_empty());
    assert_eq!(split.completed.len(), 1);

    // migrations re-ran on open without reseeding
    let positions = svc.list_positions(&ListQuery::default()).await.unwrap();
    assert_eq!(positions.total, 1);
    assert_eq!(positions.items[0].id, DEFAULT_POSITION_ID);
}

// ---------------------------------------------------------------------------
// Referential rules
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleting_task_type_removes_its_tasks() {
    let dir = TempDir::new().unwrap();
    let svc = open(&dir).await;
    let task = seed_task(&svc, "Doomed").await;

    svc.delete_task_type(&task.task_type_id).await.unwrap();
    assert!(svc.get_task(&task.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn position_in_use_cannot_be_deleted() {
    let dir = TempDir::new().unwrap();
    let svc = open(&dir).await;
    let position = svc.create_position("Tester").await.unwrap();
    let worker = svc
        .create_worker(NewWorker {
            username: "qa1".into(),
            position_id: Some(position.id.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(svc.delete_position(&position.id).await.is_err());
    svc.delete_worker(&worker.id).await.unwrap();
    svc.delete_position(&position.id).await.unwrap();
}
