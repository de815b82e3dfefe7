//! Task domain model: the record itself, the partial-update carrier and the
//! priority filter.

use serde::{Deserialize, Serialize};

/// Status every task starts with. The field is free text and no operation
/// transitions it afterwards.
pub const STATUS_PENDING: &str = "Pending";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i32>,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    /// Caller-defined date string, stored and returned verbatim.
    pub due_date: String,
    /// Plain integer, no enforced range.
    pub priority: i32,
    pub status: String,
    /// Free-form string, comma-separated by convention.
    pub tags: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub archived: bool,
}

impl Task {
    pub fn new(owner_id: i32, title: &str, description: &str, due_date: &str, priority: i32, tags: &str) -> Self {
        Task {
            id: None,
            owner_id,
            title: title.to_string(),
            description: description.to_string(),
            due_date: due_date.to_string(),
            priority,
            status: STATUS_PENDING.to_string(),
            tags: tags.to_string(),
            created_at: None,
            updated_at: None,
            archived: false,
        }
    }
}

/// Field-level partial update for [`Tasks::edit`](crate::db::tasks::Tasks::edit).
///
/// Presence is the whole signal: `None` keeps the stored value and `Some(v)`
/// sets `v`, even when `v` is an empty string or zero. There are no
/// value-based sentinels.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<i32>,
    pub tags: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none() && self.priority.is_none() && self.tags.is_none()
    }

    /// Overwrites the fields that are present, leaves the rest untouched.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(due_date) = &self.due_date {
            task.due_date = due_date.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(tags) = &self.tags {
            task.tags = tags.clone();
        }
    }
}

/// Keeps only the tasks whose priority equals `level` exactly, preserving
/// input order. No range or threshold matching.
pub fn filter_by_priority(tasks: Vec<Task>, level: i32) -> Vec<Task> {
    tasks.into_iter().filter(|task| task.priority == level).collect()
}
