//! # tk-core
//!
//! Core types, status derivation, and error types for the task tracker.
//!
//! This crate provides the foundational types shared across all `tk` crates:
//! - Entity structs for positions, task types, workers, tasks, and assignments
//! - Closed enums for priority, task status, and assignment state
//! - The clock-free task status engine
//! - ID prefix constants
//! - Cross-cutting error types and deadline validation
//! - Pagination and CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod page;
pub mod responses;
pub mod status;
