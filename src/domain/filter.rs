use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt, str::FromStr};

use crate::{
    domain::task::{Priority, Task},
    error,
};

/// Either every value, or exactly one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter<T> {
    All,
    Only(T),
}

pub type PriorityFilter = Filter<Priority>;
pub type TagFilter = Filter<String>;

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T> Filter<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Checks a single value against the filter
    pub fn matches<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted.borrow() == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Only(value) => write!(f, "{}", value),
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

impl<T> From<T> for Filter<T> {
    fn from(value: T) -> Self {
        Filter::Only(value)
    }
}

/// Search and filter criteria applied to one column's tasks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Case-insensitive substring of the title; empty matches everything
    pub search: String,
    pub priority: PriorityFilter,
    pub tag: TagFilter,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<PriorityFilter>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<TagFilter>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Builds a filter from raw control values, where "all" disables a
    /// criterion. Fails only on an unknown priority.
    pub fn from_raw(search: &str, priority: &str, tag: &str) -> error::Result<Self> {
        Ok(Self {
            search: search.to_string(),
            priority: priority.parse()?,
            tag: tag.parse().unwrap_or_default(),
        })
    }

    /// Whether no criterion narrows the result
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.priority.is_all() && self.tag.is_all()
    }

    /// Checks a task against the search query, priority and tag criteria.
    /// Column selection is the caller's job.
    pub fn matches(&self, task: &Task) -> bool {
        if !self.search.is_empty()
            && !task
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }

        if !self.priority.matches(&task.priority) {
            return false;
        }

        match &self.tag {
            Filter::All => true,
            Filter::Only(tag) => task.has_tag(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::{Column, TaskId};
    use chrono::{TimeZone, Utc};

    fn task(title: &str) -> Task {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Task::new(TaskId::new(1), Column::Todo, title.to_string(), created)
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(PriorityFilter::from_str("all").unwrap(), Filter::All);
        assert!(PriorityFilter::from_str("ALL").is_err());
        assert_eq!(
            PriorityFilter::from_str("high").unwrap(),
            Filter::Only(Priority::High)
        );
        assert!(PriorityFilter::from_str("severe").is_err());

        assert_eq!(
            TagFilter::from_str("design").unwrap(),
            Filter::Only("design".to_string())
        );
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(PriorityFilter::All.to_string(), "all");
        assert_eq!(Filter::Only(Priority::Urgent).to_string(), "urgent");
    }

    #[test]
    fn test_from_raw_values() {
        let filter = TaskFilter::from_raw("deploy", "urgent", "all").unwrap();
        assert_eq!(filter.search, "deploy");
        assert_eq!(filter.priority, Filter::Only(Priority::Urgent));
        assert!(filter.tag.is_all());

        assert!(TaskFilter::from_raw("", "all", "all").unwrap().is_empty());
        assert!(TaskFilter::from_raw("", "blocker", "all").is_err());
    }

    #[test]
    fn test_tags_resembling_all_are_real_tags() {
        let filter = TaskFilter::from_raw("", "all", "All").unwrap();
        assert_eq!(filter.tag, Filter::Only("All".to_string()));

        let filter = TaskFilter::from_raw("", "all", " all").unwrap();
        assert_eq!(filter.tag, Filter::Only(" all".to_string()));

        assert!(filter.matches(&task("Spaced").with_tags([" all"])));
        assert!(!filter.matches(&task("Plain").with_tags(["all"])));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TaskFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&task("Anything at all")));
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let filter = TaskFilter::new().search("LOGIN");

        assert!(filter.matches(&task("Fix login redirect")));
        assert!(!filter.matches(&task("Fix logout redirect")));
    }

    #[test]
    fn test_search_ignores_description_and_tags() {
        let filter = TaskFilter::new().search("billing");
        let candidate = task("Update invoices")
            .with_description("billing service rewrite")
            .with_tags(["billing"]);

        assert!(!filter.matches(&candidate));
    }

    #[test]
    fn test_priority_filter() {
        let filter = TaskFilter::new().priority(Priority::High);

        assert!(filter.matches(&task("Hot").with_priority(Priority::High)));
        assert!(!filter.matches(&task("Not hot").with_priority(Priority::Urgent)));
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let filter = TaskFilter::new().tag("frontend".to_string());

        assert!(filter.matches(&task("Button").with_tags(["frontend", "ui"])));
        assert!(!filter.matches(&task("Button").with_tags(["Frontend"])));
        assert!(!filter.matches(&task("Button")));
    }

    #[test]
    fn test_criteria_combine() {
        let filter = TaskFilter::new()
            .search("api")
            .priority(Priority::Urgent)
            .tag("backend".to_string());

        let hit = task("API rate limits")
            .with_priority(Priority::Urgent)
            .with_tags(["backend"]);
        assert!(filter.matches(&hit));

        let wrong_priority = hit.clone().with_priority(Priority::Low);
        assert!(!filter.matches(&wrong_priority));
    }
}
