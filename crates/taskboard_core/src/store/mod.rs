//! Entity store: canonical board state and the reducer over it.
//!
//! # Responsibility
//! - Own the three collections plus the loading flag.
//! - Apply actions as pure state transitions, enforcing order invariants.
//!
//! # Invariants
//! - `apply` is total and synchronous; unrecognized or dangling-id actions
//!   return the input state unchanged.
//! - After any move, order values in the affected scope are exactly
//!   `{0..k}` with no gaps or duplicates.
//! - Cascade deletes: a board takes its columns and tasks with it, a
//!   column takes its tasks.
//! - Snapshots are immutable values; `apply` never mutates its input.

use crate::model::{Board, BoardId, Column, ColumnId, Task};
use serde::{Deserialize, Serialize};

pub mod action;
pub mod ordering;

pub use action::Action;

use ordering::{move_across, move_within, Ordered};

impl Ordered for Column {
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

impl Ordered for Task {
    fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Serializable wire shape of the full board state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub boards: Vec<Board>,
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

/// The canonical in-memory state: flat collections plus a loading flag.
///
/// A not-yet-loaded store (`loading == true`) is distinct from an empty
/// one; callers should gate board navigation on the flag.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub boards: Vec<Board>,
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
    pub loading: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            boards: Vec::new(),
            columns: Vec::new(),
            tasks: Vec::new(),
            loading: true,
        }
    }
}

impl From<Snapshot> for BoardState {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            boards: snapshot.boards,
            columns: snapshot.columns,
            tasks: snapshot.tasks,
            loading: false,
        }
    }
}

impl BoardState {
    /// Copies the collections into a serializable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            boards: self.boards.clone(),
            columns: self.columns.clone(),
            tasks: self.tasks.clone(),
        }
    }

    /// Columns of one board, sorted by order. Recomputed on every read;
    /// collections are bounded by what fits on a screen.
    pub fn columns_of(&self, board_id: BoardId) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self
            .columns
            .iter()
            .filter(|column| column.board_id == board_id)
            .collect();
        columns.sort_by_key(|column| column.order);
        columns
    }

    /// Tasks of one column, sorted by order.
    pub fn tasks_in(&self, column_id: ColumnId) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.column_id == column_id)
            .collect();
        tasks.sort_by_key(|task| task.order);
        tasks
    }

    /// Looks up a board by id.
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == id)
    }

    /// Reduces one action into the next state.
    ///
    /// Total and infallible: malformed actions (dangling ids, out-of-range
    /// indices) are absorbed as no-ops or clamped, never signaled. The
    /// input state is left untouched.
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        let mut next = self.clone();
        match action {
            Action::InitState(snapshot) => {
                next.boards = snapshot.boards;
                next.columns = snapshot.columns;
                next.tasks = snapshot.tasks;
                next.loading = false;
            }

            Action::AddBoard { id, title } => {
                next.boards.push(Board::with_id(id, title));
            }
            Action::UpdateBoard { id, patch } => {
                if let Some(board) = next.boards.iter_mut().find(|board| board.id == id) {
                    board.apply_patch(patch);
                }
            }
            Action::DeleteBoard(id) => {
                next.boards.retain(|board| board.id != id);
                next.columns.retain(|column| column.board_id != id);
                next.tasks.retain(|task| task.board_id != id);
            }

            Action::AddColumn(column) => {
                next.columns.push(column);
            }
            Action::UpdateColumn { id, patch } => {
                if let Some(column) = next.columns.iter_mut().find(|column| column.id == id) {
                    column.apply_patch(patch);
                }
            }
            Action::DeleteColumn(id) => {
                // Sibling column orders are left with a gap; the next
                // MoveColumn recomputes the board's sequence.
                next.columns.retain(|column| column.id != id);
                next.tasks.retain(|task| task.column_id != id);
            }
            Action::MoveColumn {
                board_id,
                source_index,
                destination_index,
            } => {
                let lane = sorted_lane(&next.columns, |column| column.board_id == board_id);
                let lane = move_within(lane, source_index, destination_index);
                splice_back(&mut next.columns, lane, |column| column.id);
            }

            Action::AddTask(task) => {
                next.tasks.push(*task);
            }
            Action::UpdateTask { id, patch } => {
                if let Some(task) = next.tasks.iter_mut().find(|task| task.id == id) {
                    task.apply_patch(patch);
                }
            }
            Action::DeleteTask(id) => {
                next.tasks.retain(|task| task.id != id);
            }
            Action::MoveTask {
                task_id,
                source_column_id,
                destination_column_id,
                source_index,
                destination_index,
            } => {
                if !next.tasks.iter().any(|task| task.id == task_id) {
                    return next;
                }

                if source_column_id == destination_column_id {
                    // Same-column moves short-circuit on equal indices;
                    // cross-column moves below always apply.
                    if source_index == destination_index {
                        return next;
                    }
                    let lane =
                        sorted_lane(&next.tasks, |task| task.column_id == source_column_id);
                    let lane = move_within(lane, source_index, destination_index);
                    splice_back(&mut next.tasks, lane, |task| task.id);
                } else {
                    let source =
                        sorted_lane(&next.tasks, |task| task.column_id == source_column_id);
                    let dest = sorted_lane(&next.tasks, |task| {
                        task.column_id == destination_column_id
                    });
                    // The moved task is located by id within its source
                    // lane; the reported index is advisory.
                    let Some(at) = source.iter().position(|task| task.id == task_id) else {
                        return next;
                    };
                    let (source, dest) =
                        move_across(source, dest, at, destination_index, |task| {
                            task.column_id = destination_column_id;
                        });
                    splice_back(&mut next.tasks, source, |task| task.id);
                    splice_back(&mut next.tasks, dest, |task| task.id);
                }
            }
        }
        next
    }
}

/// Clones the matching subsequence, sorted by order.
fn sorted_lane<T: Clone + OrderKey>(items: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    let mut lane: Vec<T> = items.iter().filter(|item| keep(item)).cloned().collect();
    lane.sort_by_key(|item| item.order_key());
    lane
}

/// Writes reordered lane items back over their originals, leaving every
/// untouched item in place.
fn splice_back<T: Clone, K: PartialEq>(items: &mut [T], lane: Vec<T>, id_of: impl Fn(&T) -> K) {
    for item in items.iter_mut() {
        if let Some(updated) = lane.iter().find(|candidate| id_of(candidate) == id_of(item)) {
            *item = updated.clone();
        }
    }
}

/// Read side of [`Ordered`], used for lane sorting.
trait OrderKey {
    fn order_key(&self) -> u32;
}

impl OrderKey for Column {
    fn order_key(&self) -> u32 {
        self.order
    }
}

impl OrderKey for Task {
    fn order_key(&self) -> u32 {
        self.order
    }
}
