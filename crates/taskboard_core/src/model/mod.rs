//! Board/column/task domain model.
//!
//! # Responsibility
//! - Define the three entity records owned by the board state.
//! - Provide constructors and explicit field-level patch types.
//!
//! # Invariants
//! - Entity ids are stable and never reused.
//! - Wire field names stay camelCase to match the persisted snapshot shape.

use std::time::{SystemTime, UNIX_EPOCH};

pub mod board;
pub mod column;
pub mod task;

pub use board::{Board, BoardId, BoardPatch};
pub use column::{Column, ColumnId, ColumnPatch};
pub use task::{NewTask, Priority, Task, TaskId, TaskPatch};

/// Current wall-clock time as Unix epoch milliseconds.
///
/// Saturates instead of panicking for clocks set before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
