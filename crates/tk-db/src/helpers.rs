//! Row-to-entity parsing helpers and small shared queries.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual
//! datetime format issue (`SQLite`'s `datetime('now')` vs Rust's
//! `to_rfc3339()`).

use chrono::{DateTime, NaiveDate, Utc};
use tk_core::enums::EntityType;

use crate::error::DatabaseError;

/// Storage format of `tasks.deadline`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a `YYYY-MM-DD` TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Format a date for storage. Lexicographic order equals date order.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with every tk-core enum: the serde name is the stored value.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| DatabaseError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// Use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Split a `group_concat` column into sorted IDs.
#[must_use]
pub fn split_ids(joined: Option<&str>) -> Vec<String> {
    let mut ids: Vec<String> = joined
        .unwrap_or_default()
        .split(',')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    ids.sort();
    ids
}

/// Read a `COUNT(*)` column as `u64`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the count is negative.
pub fn count_from_row(row: &libsql::Row, idx: i32) -> Result<u64, DatabaseError> {
    let n = row.get::<i64>(idx)?;
    u64::try_from(n).map_err(|_| DatabaseError::Query(format!("negative count: {n}")))
}

/// Map `EntityType` to the corresponding SQL table name.
///
/// Exhaustive match: adding an `EntityType` variant forces updating this.
#[must_use]
pub const fn entity_type_to_table(entity: EntityType) -> &'static str {
    match entity {
        EntityType::Position => "positions",
        EntityType::TaskType => "task_types",
        EntityType::Worker => "workers",
        EntityType::Task => "tasks",
    }
}

/// Check that a row with `id` exists in the entity's table.
///
/// # Errors
///
/// Returns `DatabaseError::Core(NotFound)` if no such row exists, or the
/// underlying libSQL error.
pub async fn require_exists(
    conn: &libsql::Connection,
    entity: EntityType,
    id: &str,
) -> Result<(), DatabaseError> {
    let table = entity_type_to_table(entity);
    let mut rows = conn
        .query(&format!("SELECT 1 FROM {table} WHERE id = ?1"), [id])
        .await?;
    if rows.next().await?.is_none() {
        return Err(DatabaseError::not_found(entity, id));
    }
    Ok(())
}

/// Count rows whose `column` contains `term`, case-insensitively.
///
/// An empty `term` matches every row (`instr(x, '')` is 1).
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails.
pub async fn count_matching(
    conn: &libsql::Connection,
    table: &str,
    column: &str,
    term: &str,
) -> Result<u64, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT COUNT(*) FROM {table} WHERE instr(lower({column}), lower(?1)) > 0"),
            [term],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    count_from_row(&row, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_datetime_formats() {
        let a = parse_datetime("2023-11-18T10:00:00+00:00").unwrap();
        let b = parse_datetime("2023-11-18 10:00:00").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_optional_datetime_is_none() {
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
    }

    #[test]
    fn date_roundtrip() {
        let d = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        assert_eq!(format_date(d), "2023-01-05");
        assert_eq!(parse_date("2023-01-05").unwrap(), d);
        assert!(parse_date("05/01/2023").is_err());
    }

    #[test]
    fn split_ids_sorts_and_skips_empty() {
        assert_eq!(split_ids(Some("wrk-b,wrk-a")), vec!["wrk-a", "wrk-b"]);
        assert!(split_ids(Some("")).is_empty());
        assert!(split_ids(None).is_empty());
    }

    #[test]
    fn parse_enum_reads_status_codes() {
        use tk_core::enums::{Priority, TaskStatus};
        assert_eq!(parse_enum::<TaskStatus>("IPAD").unwrap(), TaskStatus::InProgressAfterDeadline);
        assert_eq!(parse_enum::<Priority>("medium").unwrap(), Priority::Medium);
        assert!(parse_enum::<TaskStatus>("done").is_err());
    }
}
