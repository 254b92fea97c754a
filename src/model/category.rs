use serde::{Deserialize, Serialize};

/// Display label for a group of tasks.
///
/// Owned by the store; the `task_count` cache is refreshed by the store
/// after every mutation and is read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Name tasks reference via their `category` field
    pub name: String,
    /// Display color (CSS-style string, opaque to the core)
    pub color: String,
    /// Number of tasks currently referencing this category
    pub task_count: usize,
}

impl Category {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Category {
            name: name.into(),
            color: color.into(),
            task_count: 0,
        }
    }
}
