//! Reducer action vocabulary.
//!
//! # Responsibility
//! - Enumerate every state transition the presentation layer may request.
//!
//! # Invariants
//! - Payloads carry caller-generated ids; the reducer never invents ids.
//! - Actions referencing unknown ids reduce to no-ops, never to errors.

use crate::model::{BoardId, BoardPatch, Column, ColumnId, ColumnPatch, Task, TaskId, TaskPatch};
use crate::store::Snapshot;

/// A requested state transition.
///
/// Index fields are positions within the relevant sibling sequence sorted
/// by order, exactly as a drag-and-drop collaborator reports them.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace all collections wholesale and clear the loading flag.
    InitState(Snapshot),
    /// Append a board; creation timestamps are stamped by the reducer.
    AddBoard { id: BoardId, title: String },
    UpdateBoard { id: BoardId, patch: BoardPatch },
    /// Remove the board and cascade to its columns and tasks.
    DeleteBoard(BoardId),
    /// Append a column as given; the caller supplies `order` (current
    /// column count of the board).
    AddColumn(Column),
    UpdateColumn { id: ColumnId, patch: ColumnPatch },
    /// Remove the column and cascade to its tasks. Sibling order gaps are
    /// left open until the next move.
    DeleteColumn(ColumnId),
    MoveColumn {
        board_id: BoardId,
        source_index: usize,
        destination_index: usize,
    },
    /// Append a task as given; the caller supplies placement and order.
    AddTask(Box<Task>),
    UpdateTask { id: TaskId, patch: TaskPatch },
    /// Remove the task. Sibling order gaps are left open until the next
    /// move.
    DeleteTask(TaskId),
    MoveTask {
        task_id: TaskId,
        source_column_id: ColumnId,
        destination_column_id: ColumnId,
        source_index: usize,
        destination_index: usize,
    },
}
