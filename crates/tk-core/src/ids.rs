//! ID prefixes for store-generated identifiers.
//!
//! IDs have the form `{prefix}-{8 hex chars}`, e.g. `tsk-a3f8b2c1`.

pub const PREFIX_POSITION: &str = "pos";
pub const PREFIX_TASK_TYPE: &str = "typ";
pub const PREFIX_WORKER: &str = "wrk";
pub const PREFIX_TASK: &str = "tsk";

/// Every prefix in use, for tests and diagnostics.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_POSITION,
    PREFIX_TASK_TYPE,
    PREFIX_WORKER,
    PREFIX_TASK,
];

/// The position every worker falls back to when none is given.
///
/// Seeded by the initial migration and never deletable.
pub const DEFAULT_POSITION_ID: &str = "pos-default";

/// Display name of [`DEFAULT_POSITION_ID`].
pub const DEFAULT_POSITION_NAME: &str = "Unassigned";
