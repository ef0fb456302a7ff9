//! Record counts for the home screen.

use tk_core::responses::Dashboard;

use crate::error::DatabaseError;
use crate::helpers::count_from_row;
use crate::service::TaskService;

impl TaskService {
    /// Count workers, tasks, positions, and task types in one round trip.
    pub async fn dashboard(&self) -> Result<Dashboard, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT (SELECT COUNT(*) FROM workers), (SELECT COUNT(*) FROM tasks), \
                 (SELECT COUNT(*) FROM positions), (SELECT COUNT(*) FROM task_types)",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        Ok(Dashboard {
            workers: count_from_row(&row, 0)?,
            tasks: count_from_row(&row, 1)?,
            positions: count_from_row(&row, 2)?,
            task_types: count_from_row(&row, 3)?,
        })
    }
}
