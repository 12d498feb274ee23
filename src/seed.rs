//! Sample board used for demos and first runs.
//!
//! [`load_sample`] stands in for a remote fetch: it waits for a configurable
//! latency on the tokio timer before handing back a populated store, so tests
//! can run it under paused time.

use crate::{
    clock::Clock,
    domain::{BoardSnapshot, Column, Priority, Task, TaskId, TaskStore},
    error::Result,
};
use chrono::{DateTime, Duration, Utc};
use std::time::Duration as StdDuration;
use tracing::info;

struct SampleTask {
    title: &'static str,
    description: &'static str,
    column: Column,
    priority: Priority,
    due_in_days: Option<i64>,
    age_hours: i64,
    tags: &'static [&'static str],
}

const SAMPLE_TASKS: &[SampleTask] = &[
    SampleTask {
        title: "Design onboarding flow",
        description: "Wireframes for the three-step signup",
        column: Column::Backlog,
        priority: Priority::Medium,
        due_in_days: None,
        age_hours: 96,
        tags: &["design", "ux"],
    },
    SampleTask {
        title: "Evaluate charting libraries",
        description: "Compare bundle size and accessibility support",
        column: Column::Backlog,
        priority: Priority::Low,
        due_in_days: Some(14),
        age_hours: 90,
        tags: &["research"],
    },
    SampleTask {
        title: "Set up error monitoring",
        description: "Route client errors to the alerting channel",
        column: Column::Todo,
        priority: Priority::High,
        due_in_days: Some(3),
        age_hours: 72,
        tags: &["devops"],
    },
    SampleTask {
        title: "Fix login redirect loop",
        description: "Users bounce between /login and /home after token expiry",
        column: Column::Todo,
        priority: Priority::Urgent,
        due_in_days: Some(1),
        age_hours: 20,
        tags: &["bug", "auth"],
    },
    SampleTask {
        title: "Write API pagination docs",
        description: "Document cursor semantics and page limits",
        column: Column::Todo,
        priority: Priority::Medium,
        due_in_days: None,
        age_hours: 48,
        tags: &["docs", "api"],
    },
    SampleTask {
        title: "Implement dark mode toggle",
        description: "Persist preference and respect the system setting",
        column: Column::InProgress,
        priority: Priority::Medium,
        due_in_days: Some(5),
        age_hours: 60,
        tags: &["frontend", "ux"],
    },
    SampleTask {
        title: "Migrate sessions table",
        description: "Add expiry index and backfill last_seen",
        column: Column::InProgress,
        priority: Priority::High,
        due_in_days: Some(2),
        age_hours: 30,
        tags: &["backend", "database"],
    },
    SampleTask {
        title: "Review pricing page copy",
        description: "Check plan names against the billing service",
        column: Column::Review,
        priority: Priority::Low,
        due_in_days: Some(4),
        age_hours: 40,
        tags: &["marketing"],
    },
    SampleTask {
        title: "Rate-limit public API",
        description: "Token bucket per API key",
        column: Column::Review,
        priority: Priority::Urgent,
        due_in_days: None,
        age_hours: 26,
        tags: &["backend", "api"],
    },
    SampleTask {
        title: "Upgrade build toolchain",
        description: "Bump bundler and fix deprecation warnings",
        column: Column::Done,
        priority: Priority::Medium,
        due_in_days: Some(-2),
        age_hours: 120,
        tags: &["devops"],
    },
    SampleTask {
        title: "Ship notification preferences",
        description: "Per-channel opt-out for email and push",
        column: Column::Done,
        priority: Priority::High,
        due_in_days: None,
        age_hours: 110,
        tags: &["frontend", "backend"],
    },
];

/// Sample board with due dates and creation times relative to `now`
pub fn sample_snapshot(now: DateTime<Utc>) -> BoardSnapshot {
    let tasks: Vec<Task> = SAMPLE_TASKS
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let mut task = Task::new(
                TaskId::new(i as u32 + 1),
                sample.column,
                sample.title.to_string(),
                now - Duration::hours(sample.age_hours),
            )
            .with_description(sample.description)
            .with_priority(sample.priority)
            .with_tags(sample.tags.iter().copied());

            if let Some(days) = sample.due_in_days {
                task = task.with_due_date(now + Duration::days(days));
            }
            task
        })
        .rev()
        .collect();

    let mut snapshot = BoardSnapshot::with_tasks(tasks);
    snapshot.config.name = "Product Roadmap".to_string();
    snapshot.next_task_number = SAMPLE_TASKS.len() as u32 + 1;
    snapshot
}

/// Builds the sample board after waiting `latency` on the tokio timer
pub async fn load_sample<C: Clock>(clock: C, latency: StdDuration) -> Result<TaskStore<C>> {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let snapshot = sample_snapshot(clock.now());
    let store = TaskStore::from_snapshot(snapshot, clock)?;

    info!(
        tasks = store.len(),
        latency_ms = latency.as_millis() as u64,
        "sample board loaded"
    );
    Ok(store)
}
