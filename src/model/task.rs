use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task urgency level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank: low=1, medium=2, high=3
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// A single unit of work, exclusively owned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store at creation, never changed
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    /// Category name, referencing a `Category` by its `name` field
    pub category: String,
    /// When the task is due; `None` means no deadline
    pub due_date: Option<DateTime<Utc>>,
    /// Set at creation, immutable afterwards
    pub created_at: DateTime<Utc>,
    /// Bumped by the store on every mutation; always >= `created_at`
    pub updated_at: DateTime<Utc>,
    /// Ordered tags, duplicates permitted (not deduplicated)
    pub tags: Vec<String>,
}

impl Task {
    /// Materialize a draft into a full task with store-assigned identity.
    pub fn from_draft(draft: TaskDraft, id: Uuid, now: DateTime<Utc>) -> Self {
        Task {
            id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
            tags: draft.tags,
        }
    }
}

/// Every task field except identity and timestamps — the payload a
/// modal editor supplies on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: String,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

/// Partial update for a task. Each `Some` field is written over the
/// target; `None` fields are left alone. `due_date` is doubly optional
/// so a patch can clear a deadline (`Some(None)`) as well as skip it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub tags: Option<Vec<String>>,
}

impl TaskPatch {
    /// Merge this patch into `task`, field by field. Does not touch
    /// identity or timestamps; the store owns those.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(tags) = &self.tags {
            task.tags = tags.clone();
        }
    }
}

impl From<TaskDraft> for TaskPatch {
    /// A full-replace patch, used when a modal save targets an existing task.
    fn from(draft: TaskDraft) -> Self {
        TaskPatch {
            title: Some(draft.title),
            description: Some(draft.description),
            completed: Some(draft.completed),
            priority: Some(draft.priority),
            category: Some(draft.category),
            due_date: Some(draft.due_date),
            tags: Some(draft.tags),
        }
    }
}
