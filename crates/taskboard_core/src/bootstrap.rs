//! First-run seed content.
//!
//! # Responsibility
//! - Build the deterministic default board shown when no snapshot exists.
//!
//! # Invariants
//! - One board, three columns (orders 0/1/2), one example task per column
//!   (order 0 each) covering every priority level, each with a future due
//!   date. Ids and timestamps are generated fresh per seeding.

use crate::model::{now_epoch_ms, Board, Column, NewTask, Priority, Task};
use crate::store::Snapshot;
use uuid::Uuid;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Builds the first-run snapshot.
pub fn default_snapshot() -> Snapshot {
    let board = Board::new("My First Board");
    let now = now_epoch_ms();

    let todo = Column::new(Uuid::new_v4(), "To Do", board.id, 0);
    let in_progress = Column::new(Uuid::new_v4(), "In Progress", board.id, 1);
    let done = Column::new(Uuid::new_v4(), "Done", board.id, 2);

    let tasks = vec![
        Task::generate(
            NewTask {
                title: "Welcome to Task Board!".to_owned(),
                description: "This is your first task. Drag and drop me to other columns!"
                    .to_owned(),
                priority: Priority::Medium,
                due_date: Some(now + 7 * DAY_MS),
                creator: "System".to_owned(),
            },
            todo.id,
            board.id,
            0,
        ),
        Task::generate(
            NewTask {
                title: "Create your own board".to_owned(),
                description: "Click the \"Create New Board\" button to get started".to_owned(),
                priority: Priority::High,
                due_date: Some(now + 2 * DAY_MS),
                creator: "System".to_owned(),
            },
            in_progress.id,
            board.id,
            0,
        ),
        Task::generate(
            NewTask {
                title: "Drag tasks around".to_owned(),
                description: "Try moving tasks between columns by dragging them".to_owned(),
                priority: Priority::Low,
                due_date: Some(now + DAY_MS),
                creator: "System".to_owned(),
            },
            done.id,
            board.id,
            0,
        ),
    ];

    Snapshot {
        boards: vec![board],
        columns: vec![todo, in_progress, done],
        tasks,
    }
}
