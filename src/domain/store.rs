use crate::{
    clock::{Clock, SystemClock},
    domain::{
        board::BoardConfig,
        filter::TaskFilter,
        sorting::sort_for_display,
        task::{Column, Task, TaskId},
    },
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Serializable state of a whole board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub config: BoardConfig,
    /// Newest first
    pub tasks: Vec<Task>,
    pub next_task_number: u32,
}

impl BoardSnapshot {
    /// Snapshot of a default-configured board holding `tasks`
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            config: BoardConfig::default(),
            tasks,
            next_task_number: 1,
        }
    }
}

/// One rendered column: its title and the tasks that pass the filter
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    pub column: Column,
    pub title: &'a str,
    pub tasks: Vec<&'a Task>,
}

/// Owns every task on a board and applies the add, move and delete intents.
///
/// Intents that reference a blank title or an unknown id are ignored rather
/// than reported: the store is a local, single-user collection and there is
/// nothing for a caller to recover from.
#[derive(Debug)]
pub struct TaskStore<C: Clock = SystemClock> {
    config: BoardConfig,
    tasks: Vec<Task>,
    next_task_number: u32,
    version: u64,
    clock: C,
}

impl TaskStore<SystemClock> {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for TaskStore<SystemClock> {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates an empty store that stamps tasks using `clock`
    pub fn with_clock(config: BoardConfig, clock: C) -> Self {
        Self {
            config,
            tasks: Vec::new(),
            next_task_number: 1,
            version: 0,
            clock,
        }
    }

    /// Rebuilds a store from a snapshot.
    ///
    /// Fails if the configuration is invalid or two tasks share an id. The id
    /// counter is moved past every generated id already on the board.
    pub fn from_snapshot(snapshot: BoardSnapshot, clock: C) -> Result<Self> {
        snapshot.config.validate()?;

        let mut seen = HashSet::with_capacity(snapshot.tasks.len());
        for task in &snapshot.tasks {
            if !seen.insert(&task.id) {
                return Err(BoardError::DuplicateTaskId(task.id.to_string()));
            }
        }

        let next_task_number = snapshot
            .tasks
            .iter()
            .filter_map(|t| t.id.counter())
            .map(|n| n.saturating_add(1))
            .chain([snapshot.next_task_number, 1])
            .max()
            .unwrap_or(1);

        debug!(
            tasks = snapshot.tasks.len(),
            next_task_number, "restored board from snapshot"
        );

        Ok(Self {
            config: snapshot.config,
            tasks: snapshot.tasks,
            next_task_number,
            version: 0,
            clock,
        })
    }

    /// Captures the current board state
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            config: self.config.clone(),
            tasks: self.tasks.clone(),
            next_task_number: self.next_task_number,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Bumped on every mutation that changed the board
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks, most recently added first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Generates an id not used by any task on the board, or `None` once
    /// the counter is exhausted
    fn next_task_id(&mut self) -> Option<TaskId> {
        loop {
            let n = self.next_task_number;
            self.next_task_number = n.checked_add(1)?;

            let id = TaskId::new(n);
            if !self.contains(&id) {
                return Some(id);
            }
        }
    }

    /// Adds a medium-priority task to the front of the board.
    ///
    /// The title is trimmed; a blank title adds nothing and returns `None`,
    /// as does a board whose id counter is exhausted.
    pub fn add_task(&mut self, column: Column, title: &str) -> Option<&Task> {
        let title = title.trim();
        if title.is_empty() {
            debug!(column = column.as_str(), "ignoring task with blank title");
            return None;
        }

        let Some(id) = self.next_task_id() else {
            debug!(column = column.as_str(), "ignoring task: id counter exhausted");
            return None;
        };
        let task = Task::new(id, column, title.to_string(), self.clock.now());
        debug!(id = %task.id, column = column.as_str(), "task added");

        self.tasks.insert(0, task);
        self.version += 1;
        self.tasks.first()
    }

    /// Moves a task to another column.
    ///
    /// Returns whether anything changed: unknown ids and moves to the
    /// task's current column are no-ops.
    pub fn move_task(&mut self, id: &TaskId, target: Column) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            debug!(%id, "ignoring move of unknown task");
            return false;
        };

        if task.column == target {
            return false;
        }

        let from = task.column;
        task.column = target;
        self.version += 1;
        debug!(%id, from = from.as_str(), to = target.as_str(), "task moved");
        true
    }

    /// Removes a task. Returns whether it existed.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| &t.id == id) else {
            debug!(%id, "ignoring delete of unknown task");
            return false;
        };

        self.tasks.remove(pos);
        self.version += 1;
        debug!(%id, "task deleted");
        true
    }

    /// Tasks in `column` that pass `filter`, in display order
    pub fn visible_tasks(&self, column: Column, filter: &TaskFilter) -> Vec<&Task> {
        let mut visible: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.column == column && filter.matches(t))
            .collect();

        sort_for_display(&mut visible);
        visible
    }

    /// Every column in board order with its visible tasks
    pub fn board_view(&self, filter: &TaskFilter) -> Vec<ColumnView<'_>> {
        Column::ALL
            .iter()
            .map(|&column| ColumnView {
                column,
                title: self.config.title_for(column),
                tasks: self.visible_tasks(column, filter),
            })
            .collect()
    }

    /// Number of tasks in a column, ignoring filters
    pub fn count_in(&self, column: Column) -> usize {
        self.tasks.iter().filter(|t| t.column == column).count()
    }

    /// Sorted, de-duplicated tags used anywhere on the board
    pub fn available_tags(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .flat_map(|t| t.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Unfinished tasks whose due date has passed, in display order
    pub fn overdue_tasks(&self) -> Vec<&Task> {
        let now = self.clock.now();
        let mut overdue: Vec<&Task> = self.tasks.iter().filter(|t| t.is_overdue(now)).collect();
        sort_for_display(&mut overdue);
        overdue
    }
}
