//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage and
//!   first-run seeding end to end.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::db::open_db_in_memory;
use taskboard_core::{BoardService, SqliteSnapshotStore};

fn main() {
    println!("taskboard_core version={}", taskboard_core::core_version());

    let Ok(conn) = open_db_in_memory() else {
        eprintln!("storage bootstrap failed");
        std::process::exit(1);
    };
    let mut service = BoardService::new(SqliteSnapshotStore::new(&conn));
    if let Err(err) = service.init() {
        eprintln!("snapshot load failed: {err}");
        std::process::exit(1);
    }

    let state = service.state();
    println!(
        "seeded boards={} columns={} tasks={}",
        state.boards.len(),
        state.columns.len(),
        state.tasks.len()
    );
    service.flush();
}
