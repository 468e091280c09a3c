//! Core state engine for the task board.
//! This crate is the single source of truth for ordering invariants,
//! move/reorder semantics and cascade deletes.

pub mod bootstrap;
pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod service;
pub mod store;

pub use bootstrap::default_snapshot;
pub use logging::init_logging;
pub use model::{
    Board, BoardId, BoardPatch, Column, ColumnId, ColumnPatch, NewTask, Priority, Task, TaskId,
    TaskPatch,
};
pub use persist::{PersistError, PersistResult, SnapshotStore, SqliteSnapshotStore};
pub use service::BoardService;
pub use store::{Action, BoardState, Snapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
