//! Task status engine.
//!
//! Status is a pure function of the deadline, the completion timestamp, and
//! the current date. The current date is always passed in; nothing here reads
//! a clock.
//!
//! Equality on either boundary counts in the task's favour: a deadline equal
//! to today is still `InProgress`, and a deadline equal to the completion date
//! is `CompletedOnTime`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::Task;
use crate::enums::TaskStatus;

/// Compute the status for the given deadline and completion state.
#[must_use]
pub fn derive_status(
    deadline: NaiveDate,
    time_completed: Option<DateTime<Utc>>,
    today: NaiveDate,
) -> TaskStatus {
    match time_completed {
        Some(completed) if deadline >= completed.date_naive() => TaskStatus::CompletedOnTime,
        Some(_) => TaskStatus::CompletedAfterDeadline,
        None if deadline >= today => TaskStatus::InProgress,
        None => TaskStatus::InProgressAfterDeadline,
    }
}

impl Task {
    /// Recompute `status` (and keep `is_completed` in step with it).
    ///
    /// Returns `true` if either field changed, i.e. the row needs writing.
    pub fn refresh_status(&mut self, today: NaiveDate) -> bool {
        let status = derive_status(self.deadline, self.time_completed, today);
        let is_completed = status.is_completed();
        let changed = status != self.status || is_completed != self.is_completed;
        self.status = status;
        self.is_completed = is_completed;
        changed
    }

    /// Mark the task completed at `now` and re-derive its status.
    ///
    /// Re-finishing an already completed task overwrites the timestamp.
    pub fn finish(&mut self, now: DateTime<Utc>) {
        self.is_completed = true;
        self.time_completed = Some(now);
        self.refresh_status(now.date_naive());
    }
}
