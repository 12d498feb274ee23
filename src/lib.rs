//! # Taskboard Core
//!
//! Core model for a kanban-style task board: an in-memory task store with
//! add/move/delete intents, and the filtered, priority-ordered view of each
//! column that a presentation layer renders.
//!
//! Nothing here depends on a UI framework. Any caller (a CLI, a test
//! harness, a UI layer) can own a [`TaskStore`] and drive it directly.

pub mod clock;
pub mod domain;
pub mod error;
pub mod seed;
pub mod storage;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::{
    board::{BoardConfig, ColumnConfig},
    filter::{Filter, PriorityFilter, TagFilter, TaskFilter},
    store::{BoardSnapshot, ColumnView, TaskStore},
    task::{Column, Priority, Task, TaskId},
};
pub use error::{BoardError, Result};
pub use storage::Storage;
