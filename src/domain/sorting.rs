use crate::domain::task::{Priority, Task};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Sorts tasks into the order a column displays them
///
/// Order: priority (urgent first), then due date (dated tasks before
/// undated ones, earliest first), then creation time (oldest first).
/// The sort is stable, so tasks that tie on all three keep their
/// relative order.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use taskboard_core::domain::sorting::sort_for_display;
/// use taskboard_core::{Column, Priority, Task, TaskId};
///
/// let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let mut tasks = vec![
///     Task::new(TaskId::new(1), Column::Todo, "Later".to_string(), created)
///         .with_priority(Priority::Low),
///     Task::new(TaskId::new(2), Column::Todo, "Now".to_string(), created)
///         .with_priority(Priority::Urgent),
/// ];
///
/// sort_for_display(&mut tasks);
/// assert_eq!(tasks[0].id.as_str(), "TSK2");
/// ```
pub fn sort_for_display<T: AsRef<Task>>(tasks: &mut [T]) {
    tasks.sort_by(|a, b| compare_for_display(a.as_ref(), b.as_ref()));
}

/// Display ordering between two tasks
pub fn compare_for_display(a: &Task, b: &Task) -> Ordering {
    compare_priority(&a.priority, &b.priority)
        .then_with(|| compare_option_dates(a.due_date, b.due_date))
        .then_with(|| a.created_at.cmp(&b.created_at))
}

/// Compare priorities by rank: Urgent → High → Medium → Low
fn compare_priority(a: &Priority, b: &Priority) -> Ordering {
    a.rank().cmp(&b.rank())
}

/// Compare Option<DateTime> with None always sorting to end
fn compare_option_dates(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a_date), Some(b_date)) => a_date.cmp(&b_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
