pub mod board;
pub mod filter;
pub mod sorting;
pub mod store;
pub mod task;

pub use board::{BoardConfig, ColumnConfig};
pub use filter::{Filter, PriorityFilter, TagFilter, TaskFilter};
pub use sorting::{compare_for_display, sort_for_display};
pub use store::{BoardSnapshot, ColumnView, TaskStore};
pub use task::{Column, Priority, Task, TaskId};
