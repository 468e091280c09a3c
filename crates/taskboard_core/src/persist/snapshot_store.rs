//! Blob-style snapshot storage over the `snapshots` key-value table.

use crate::db::DbError;
use crate::store::Snapshot;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key the whole board snapshot lives under. Matches the original
/// application's storage key so migrated blobs stay readable.
const SNAPSHOT_KEY: &str = "taskBoardState";

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence failure while loading or saving a snapshot.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    Serde(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "snapshot encoding failed: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Get/set contract for the serialized board snapshot.
///
/// Implementations are best-effort durability: the board service treats
/// `save` failures as lost durability, never as lost state.
pub trait SnapshotStore {
    /// Loads the persisted snapshot, or `None` on first run.
    fn load(&self) -> PersistResult<Option<Snapshot>>;

    /// Persists the snapshot, replacing any previous one.
    fn save(&self, snapshot: &Snapshot) -> PersistResult<()>;
}

/// SQLite-backed snapshot store.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn load(&self) -> PersistResult<Option<Snapshot>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM snapshots WHERE key = ?1;",
                [SNAPSHOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> PersistResult<()> {
        let body = serde_json::to_string(snapshot)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, body, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![SNAPSHOT_KEY, body],
        )?;
        Ok(())
    }
}
