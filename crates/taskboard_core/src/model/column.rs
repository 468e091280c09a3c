//! Column entity.
//!
//! # Invariants
//! - `order` is unique and contiguous among live columns of one board
//!   immediately after any move; plain deletes may leave gaps until the
//!   next move recomputes the sequence.

use super::BoardId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a column.
pub type ColumnId = Uuid;

/// Ordered stage within a board (for example "To Do").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Back-reference to the owning board.
    pub board_id: BoardId,
    /// Zero-based rank among the board's columns.
    pub order: u32,
}

impl Column {
    /// Creates a column at the given rank.
    pub fn new(id: ColumnId, title: impl Into<String>, board_id: BoardId, order: u32) -> Self {
        Self {
            id,
            title: title.into(),
            board_id,
            order,
        }
    }

    /// Applies a patch. Column order is never changed this way; moves own
    /// order maintenance.
    pub fn apply_patch(&mut self, patch: ColumnPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
    }
}

/// Field-level update for a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnPatch {
    pub title: Option<String>,
}
