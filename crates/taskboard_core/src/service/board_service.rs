//! Board service: the one store object owning reducer state.
//!
//! # Responsibility
//! - Serialize dispatches: one action fully reduced before the next.
//! - Persist every post-load state change best-effort.
//!
//! # Invariants
//! - In-memory state is never disturbed by a persistence failure; a
//!   failed save only costs durability.
//! - No persistence happens while the store is still loading.

use crate::bootstrap::default_snapshot;
use crate::persist::{PersistResult, SnapshotStore};
use crate::store::{Action, BoardState};
use log::{info, warn};

/// Explicit store object constructed once at startup and injected into
/// the presentation layer; `dispatch` is its only mutator.
pub struct BoardService<S: SnapshotStore> {
    state: BoardState,
    store: S,
}

impl<S: SnapshotStore> BoardService<S> {
    /// Creates a service in the not-yet-loaded state.
    pub fn new(store: S) -> Self {
        Self {
            state: BoardState::default(),
            store,
        }
    }

    /// Loads the persisted snapshot, seeding default content on first run.
    ///
    /// # Errors
    /// Load failures are returned rather than masked: seeding over an
    /// unreadable snapshot could clobber real data on the next save.
    pub fn init(&mut self) -> PersistResult<()> {
        let snapshot = match self.store.load()? {
            Some(snapshot) => {
                info!(
                    "event=store_init module=service status=ok source=persisted boards={}",
                    snapshot.boards.len()
                );
                snapshot
            }
            None => {
                let seeded = default_snapshot();
                info!("event=store_init module=service status=ok source=seed");
                seeded
            }
        };
        // Routed through dispatch so the freshly loaded or seeded state is
        // persisted immediately; a first-run seed must survive an exit
        // before the first user action.
        self.dispatch(Action::InitState(snapshot));
        Ok(())
    }

    /// Reduces one action and persists the result.
    ///
    /// Save failures are logged and swallowed; callers always observe the
    /// new in-memory state.
    pub fn dispatch(&mut self, action: Action) {
        self.state = self.state.apply(action);
        if !self.state.loading {
            self.persist();
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Consumes the service, handing back the injected store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Final best-effort persistence pass, for shutdown.
    pub fn flush(&self) {
        if !self.state.loading {
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.state.snapshot()) {
            warn!("event=snapshot_save module=service status=error error={err}");
        }
    }
}
