//! Task entity.
//!
//! # Responsibility
//! - Unit-of-work record with priority, optional due date and description.
//!
//! # Invariants
//! - `board_id` is a denormalized copy of the owning column's board, kept
//!   for fast board-level filtering; the reducer keeps both references in
//!   step across moves and cascades.
//! - `order` is unique and contiguous among live tasks of one column
//!   immediately after any move.

use super::{now_epoch_ms, BoardId, ColumnId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Task urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Canonical lowercase name, matching the wire encoding.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A unit of work belonging to exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Non-empty display title. Validated by the caller before dispatch.
    pub title: String,
    /// Free-form body, may be empty.
    pub description: String,
    /// Back-reference to the containing column.
    pub column_id: ColumnId,
    /// Denormalized owning board, always equal to the column's `board_id`.
    pub board_id: BoardId,
    pub priority: Priority,
    /// Optional deadline, epoch milliseconds.
    pub due_date: Option<i64>,
    /// Display name of whoever created the task.
    pub creator: String,
    pub created_at: i64,
    pub updated_at: i64,
    /// Zero-based rank among the column's tasks.
    pub order: u32,
}

/// Caller-supplied fields for a new task; id, timestamps and placement
/// come from [`Task::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<i64>,
    pub creator: String,
}

impl Task {
    /// Creates a task at the given placement with fresh timestamps.
    pub fn new(
        id: TaskId,
        fields: NewTask,
        column_id: ColumnId,
        board_id: BoardId,
        order: u32,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id,
            title: fields.title,
            description: fields.description,
            column_id,
            board_id,
            priority: fields.priority,
            due_date: fields.due_date,
            creator: fields.creator,
            created_at: now,
            updated_at: now,
            order,
        }
    }

    /// Creates a task with a generated id.
    pub fn generate(fields: NewTask, column_id: ColumnId, board_id: BoardId, order: u32) -> Self {
        Self::new(Uuid::new_v4(), fields, column_id, board_id, order)
    }

    /// Applies a patch.
    ///
    /// `updated_at` changes only when the patch carries it; edit flows
    /// include a fresh timestamp, programmatic tweaks may not.
    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(creator) = patch.creator {
            self.creator = creator;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }
}

/// Field-level update for a task.
///
/// `due_date` is doubly optional: `None` leaves the deadline alone,
/// `Some(None)` clears it, `Some(Some(ms))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<i64>>,
    pub creator: Option<String>,
    pub updated_at: Option<i64>,
}
