//! Board entity.
//!
//! # Responsibility
//! - Top-level container record for a set of columns and tasks.
//!
//! # Invariants
//! - Deleting a board cascades to every column and task referencing it
//!   (enforced by the reducer, not here).

use super::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a board.
pub type BoardId = Uuid;

/// Top-level container for columns and tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    /// Non-empty display title. Validated by the caller before dispatch.
    pub title: String,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
    /// Last modification time, epoch milliseconds.
    pub updated_at: i64,
}

impl Board {
    /// Creates a board with a generated id and fresh timestamps.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a board with a caller-provided id and fresh timestamps.
    ///
    /// Used when the presentation layer generates ids up front.
    pub fn with_id(id: BoardId, title: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        Self {
            id,
            title: title.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a patch and refreshes `updated_at`.
    pub fn apply_patch(&mut self, patch: BoardPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        self.updated_at = now_epoch_ms();
    }
}

/// Field-level update for a board. Names exactly the fields an update
/// action may change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardPatch {
    pub title: Option<String>,
}
