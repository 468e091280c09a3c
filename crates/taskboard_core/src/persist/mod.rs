//! Snapshot persistence contracts and SQLite implementation.
//!
//! # Responsibility
//! - Define the load/save contract the board service persists through.
//! - Keep SQL and JSON encoding details behind that contract.
//!
//! # Invariants
//! - A snapshot is stored as one JSON blob under a well-known key.
//! - Persistence failures never reach back into reducer state; they are
//!   surfaced as errors for the caller to log or drop.

pub mod snapshot_store;

pub use snapshot_store::{PersistError, PersistResult, SnapshotStore, SqliteSnapshotStore};
