use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::task::Priority;

/// Which task field the comparator orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    CreatedAt,
    DueDate,
    Priority,
    Title,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Apply this direction to a base (ascending) comparison.
    pub fn apply(self, base: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => base,
            SortOrder::Desc => base.reverse(),
        }
    }
}

/// The combined search/category/priority/completion/sort criteria applied
/// to the task collection. A plain value: replaced wholesale or merged
/// field-by-field via [`FilterPatch`], never mutated in place by readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Case-insensitive substring query; empty means no search filter
    pub search: String,
    /// Exact category name; empty means all categories
    pub category: String,
    /// Exact priority; `None` means all priorities
    pub priority: Option<Priority>,
    /// Tri-state completion filter; `None` means both
    pub completed: Option<bool>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for FilterSpec {
    /// Initial view: everything visible, newest first.
    fn default() -> Self {
        FilterSpec {
            search: String::new(),
            category: String::new(),
            priority: None,
            completed: None,
            sort_by: SortKey::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

/// Partial [`FilterSpec`] update from a filter-bar collaborator.
///
/// The tri-state fields are doubly optional: `Some(None)` resets the
/// filter back to "all", `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub category: Option<String>,
    pub priority: Option<Option<Priority>>,
    pub completed: Option<Option<bool>>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
}

impl FilterPatch {
    /// A patch that only changes the search text.
    pub fn search(text: impl Into<String>) -> Self {
        FilterPatch {
            search: Some(text.into()),
            ..Default::default()
        }
    }

    /// A patch that only changes the sort key and direction.
    pub fn sort(sort_by: SortKey, sort_order: SortOrder) -> Self {
        FilterPatch {
            sort_by: Some(sort_by),
            sort_order: Some(sort_order),
            ..Default::default()
        }
    }

    /// Shallow-merge this patch into `spec`.
    pub fn apply(&self, spec: &mut FilterSpec) {
        if let Some(search) = &self.search {
            spec.search = search.clone();
        }
        if let Some(category) = &self.category {
            spec.category = category.clone();
        }
        if let Some(priority) = self.priority {
            spec.priority = priority;
        }
        if let Some(completed) = self.completed {
            spec.completed = completed;
        }
        if let Some(sort_by) = self.sort_by {
            spec.sort_by = sort_by;
        }
        if let Some(sort_order) = self.sort_order {
            spec.sort_order = sort_order;
        }
    }
}
