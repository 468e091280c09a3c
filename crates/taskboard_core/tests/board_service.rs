use std::cell::RefCell;
use taskboard_core::db::open_db_in_memory;
use taskboard_core::persist::{PersistError, PersistResult, SnapshotStore};
use taskboard_core::{Action, BoardService, Snapshot, SqliteSnapshotStore};
use uuid::Uuid;

/// In-memory store fake recording saves, optionally failing them.
struct FakeStore {
    saved: RefCell<Vec<Snapshot>>,
    preloaded: Option<Snapshot>,
    fail_saves: bool,
}

impl FakeStore {
    fn empty() -> Self {
        Self {
            saved: RefCell::new(Vec::new()),
            preloaded: None,
            fail_saves: false,
        }
    }

    fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            preloaded: Some(snapshot),
            ..Self::empty()
        }
    }

    fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::empty()
        }
    }
}

impl SnapshotStore for FakeStore {
    fn load(&self) -> PersistResult<Option<Snapshot>> {
        Ok(self.preloaded.clone())
    }

    fn save(&self, snapshot: &Snapshot) -> PersistResult<()> {
        if self.fail_saves {
            return Err(PersistError::Db(
                taskboard_core::db::DbError::UnsupportedSchemaVersion {
                    db_version: 99,
                    latest_supported: 1,
                },
            ));
        }
        self.saved.borrow_mut().push(snapshot.clone());
        Ok(())
    }
}

#[test]
fn init_seeds_default_content_when_storage_is_empty() {
    let mut service = BoardService::new(FakeStore::empty());
    assert!(service.state().loading);

    service.init().unwrap();

    let state = service.state();
    assert!(!state.loading);
    assert_eq!(state.boards.len(), 1);
    assert_eq!(state.columns.len(), 3);
    assert_eq!(state.tasks.len(), 3);
}

#[test]
fn init_prefers_the_persisted_snapshot() {
    let snapshot = Snapshot {
        boards: vec![taskboard_core::Board::new("Restored")],
        columns: Vec::new(),
        tasks: Vec::new(),
    };
    let mut service = BoardService::new(FakeStore::with_snapshot(snapshot));

    service.init().unwrap();

    assert_eq!(service.state().boards.len(), 1);
    assert_eq!(service.state().boards[0].title, "Restored");
    assert!(service.state().tasks.is_empty());
}

#[test]
fn init_persists_the_seeded_snapshot_immediately() {
    // A first-run seed must be durable before any user action; a crash
    // right after startup would otherwise regenerate fresh ids on reopen.
    let mut service = BoardService::new(FakeStore::empty());
    service.init().unwrap();

    let seed = service.state().snapshot();
    let saves = service.into_store().saved.into_inner();
    assert_eq!(saves.len(), 1);
    assert_eq!(saves[0], seed);
    assert_eq!(saves[0].boards.len(), 1);
    assert_eq!(saves[0].columns.len(), 3);
}

#[test]
fn dispatch_persists_every_post_load_change() {
    let mut service = BoardService::new(FakeStore::empty());
    service.init().unwrap();

    let board = Uuid::new_v4();
    service.dispatch(Action::AddBoard {
        id: board,
        title: "Persist me".to_owned(),
    });
    service.dispatch(Action::DeleteBoard(board));

    let saves = service.into_store().saved.into_inner();
    // One save from init, one per dispatch.
    assert_eq!(saves.len(), 3);
    assert!(saves[1].boards.iter().any(|b| b.id == board));
    assert!(!saves[2].boards.iter().any(|b| b.id == board));
}

#[test]
fn dispatch_before_load_does_not_persist() {
    let mut service = BoardService::new(FakeStore::empty());

    service.dispatch(Action::AddBoard {
        id: Uuid::new_v4(),
        title: "Too early".to_owned(),
    });

    assert_eq!(service.state().boards.len(), 1);
    assert!(service.into_store().saved.into_inner().is_empty());
}

#[test]
fn save_failures_are_swallowed_and_state_survives() {
    let mut service = BoardService::new(FakeStore::failing());
    service.init().unwrap();

    let board = Uuid::new_v4();
    service.dispatch(Action::AddBoard {
        id: board,
        title: "Still here".to_owned(),
    });

    assert!(service.state().board(board).is_some());
}

#[test]
fn flush_writes_the_current_snapshot() {
    let mut service = BoardService::new(FakeStore::empty());
    service.init().unwrap();

    service.flush();

    let saves = service.into_store().saved.into_inner();
    assert_eq!(saves.len(), 2);
    assert_eq!(saves[1].columns.len(), 3);
}

#[test]
fn service_round_trips_through_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let board = Uuid::new_v4();
    {
        let mut service = BoardService::new(SqliteSnapshotStore::new(&conn));
        service.init().unwrap();
        service.dispatch(Action::AddBoard {
            id: board,
            title: "Durable".to_owned(),
        });
    }

    let mut reloaded = BoardService::new(SqliteSnapshotStore::new(&conn));
    reloaded.init().unwrap();
    assert!(reloaded.state().board(board).is_some());
}
