//! Task store: the sole owner of the task collection and the active
//! view criteria.
//!
//! Mutations go through the enumerated entry points below; reads go
//! through accessors that recompute derived data from scratch. Nothing
//! derived is cached except the per-category task counts, which the
//! store refreshes itself after every mutation.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::model::{Category, FilterPatch, FilterSpec, Task, TaskDraft, TaskPatch};
use crate::query::{self, TaskStats};

/// Error type for store operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The referenced task no longer exists. Benign: the UI raced a
    /// stale reference against the store; callers may ignore it.
    #[error("task not found: {0}")]
    NotFound(Uuid),
}

/// Process-wide state container for tasks, categories, filters, and
/// selection. Single writer; all readers observe consistent snapshots
/// because every operation runs to completion synchronously.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    filters: FilterSpec,
    selected: Option<Uuid>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// A store seeded with a category list. Counts are refreshed as
    /// tasks arrive.
    pub fn with_categories(categories: Vec<Category>) -> Self {
        TaskStore {
            categories,
            ..TaskStore::default()
        }
    }

    // --- Accessors ---

    /// The full collection, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn selected(&self) -> Option<Uuid> {
        self.selected
    }

    pub fn selected_task(&self) -> Option<&Task> {
        let id = self.selected?;
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The filtered/sorted view under the active filters. Recomputed on
    /// every call — never cached, so it can never be stale.
    pub fn filtered_tasks(&self) -> Vec<Task> {
        query::filter_and_sort(&self.tasks, &self.filters)
    }

    /// Stats snapshot over the full collection as of `now`.
    pub fn stats(&self, now: DateTime<Utc>) -> TaskStats {
        query::compute_stats(&self.tasks, now)
    }

    // --- Mutations ---

    /// Create a task from a draft. The store assigns the identifier and
    /// both timestamps, and prepends so the collection stays
    /// newest-first. Returns the assigned id.
    pub fn create(&mut self, draft: TaskDraft) -> Uuid {
        let id = Uuid::new_v4();
        let task = Task::from_draft(draft, id, Utc::now());
        debug!(%id, title = %task.title, "create task");
        self.tasks.insert(0, task);
        self.refresh_category_counts();
        id
    }

    /// Merge `patch` into the task with `id` and bump its `updated_at`.
    pub fn update(&mut self, id: Uuid, patch: TaskPatch) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply(task);
        task.updated_at = Utc::now();
        debug!(%id, "update task");
        self.refresh_category_counts();
        Ok(())
    }

    /// Remove the task with `id`. Clears the selection if it pointed at
    /// the deleted task.
    pub fn delete(&mut self, id: Uuid) -> Result<(), StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(StoreError::NotFound(id));
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!(%id, "delete task");
        self.refresh_category_counts();
        Ok(())
    }

    /// Flip the completion flag of the task with `id`.
    pub fn toggle(&mut self, id: Uuid) -> Result<(), StoreError> {
        let completed = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.completed)
            .ok_or(StoreError::NotFound(id))?;
        self.update(
            id,
            TaskPatch {
                completed: Some(!completed),
                ..TaskPatch::default()
            },
        )
    }

    /// Shallow-merge a partial filter update into the active spec.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        patch.apply(&mut self.filters);
        debug!(filters = ?self.filters, "set filters");
    }

    /// Select a task (or clear the selection with `None`). A dangling id
    /// is allowed here; `selected_task` simply resolves to `None`.
    pub fn select(&mut self, id: Option<Uuid>) {
        self.selected = id;
    }

    /// Recount `task_count` for every category from the live collection.
    fn refresh_category_counts(&mut self) {
        let tasks = &self.tasks;
        for category in &mut self.categories {
            category.task_count = tasks.iter().filter(|t| t.category == category.name).count();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn draft(title: &str, category: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn seeded_store() -> TaskStore {
        let mut store = TaskStore::with_categories(vec![
            Category::new("Work", "#3b82f6"),
            Category::new("Personal", "#10b981"),
        ]);
        store.create(draft("first", "Work"));
        store.create(draft("second", "Personal"));
        store.create(draft("third", "Work"));
        store
    }

    // --- Create ---

    #[test]
    fn test_create_prepends_newest_first() {
        let store = seeded_store();
        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_create_assigns_unique_ids_and_equal_timestamps() {
        let store = seeded_store();
        let ids: Vec<Uuid> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| ids.iter().filter(|i| *i == id).count() == 1));
        for task in store.tasks() {
            assert_eq!(task.created_at, task.updated_at);
        }
    }

    #[test]
    fn test_create_refreshes_category_counts() {
        let store = seeded_store();
        let work = store.categories().iter().find(|c| c.name == "Work").unwrap();
        let personal = store
            .categories()
            .iter()
            .find(|c| c.name == "Personal")
            .unwrap();
        assert_eq!(work.task_count, 2);
        assert_eq!(personal.task_count, 1);
    }

    // --- Update ---

    #[test]
    fn test_update_merges_and_bumps_updated_at() {
        let mut store = seeded_store();
        let id = store.tasks()[0].id;
        let created = store.tasks()[0].created_at;

        store
            .update(
                id,
                TaskPatch {
                    priority: Some(Priority::High),
                    ..Default::default()
                },
            )
            .unwrap();

        let task = &store.tasks()[0];
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.created_at, created);
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = seeded_store();
        let ghost = Uuid::new_v4();
        assert_eq!(
            store.update(ghost, TaskPatch::default()),
            Err(StoreError::NotFound(ghost))
        );
        // Collection untouched
        assert_eq!(store.tasks().len(), 3);
    }

    #[test]
    fn test_update_moving_category_refreshes_counts() {
        let mut store = seeded_store();
        let id = store.tasks()[0].id; // "third", Work
        store
            .update(
                id,
                TaskPatch {
                    category: Some("Personal".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let work = store.categories().iter().find(|c| c.name == "Work").unwrap();
        assert_eq!(work.task_count, 1);
    }

    // --- Delete ---

    #[test]
    fn test_delete_removes_task() {
        let mut store = seeded_store();
        let id = store.tasks()[1].id;
        store.delete(id).unwrap();
        assert_eq!(store.tasks().len(), 2);
        assert!(store.tasks().iter().all(|t| t.id != id));
    }

    #[test]
    fn test_delete_clears_matching_selection() {
        let mut store = seeded_store();
        let id = store.tasks()[0].id;
        store.select(Some(id));
        assert!(store.selected_task().is_some());

        store.delete(id).unwrap();
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_delete_keeps_unrelated_selection() {
        let mut store = seeded_store();
        let keep = store.tasks()[0].id;
        let gone = store.tasks()[1].id;
        store.select(Some(keep));
        store.delete(gone).unwrap();
        assert_eq!(store.selected(), Some(keep));
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let mut store = seeded_store();
        let ghost = Uuid::new_v4();
        assert_eq!(store.delete(ghost), Err(StoreError::NotFound(ghost)));
    }

    // --- Toggle ---

    #[test]
    fn test_toggle_flips_completion_both_ways() {
        let mut store = seeded_store();
        let id = store.tasks()[0].id;
        assert!(!store.tasks()[0].completed);

        store.toggle(id).unwrap();
        assert!(store.tasks()[0].completed);
        store.toggle(id).unwrap();
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_missing_id_is_not_found() {
        let mut store = seeded_store();
        let ghost = Uuid::new_v4();
        assert_eq!(store.toggle(ghost), Err(StoreError::NotFound(ghost)));
    }

    // --- Filters and derived reads ---

    #[test]
    fn test_set_filters_merges_partially() {
        let mut store = seeded_store();
        store.set_filters(FilterPatch::search("thi"));
        assert_eq!(store.filters().search, "thi");

        let filtered = store.filtered_tasks();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "third");

        // A second partial update leaves the search in place
        store.set_filters(FilterPatch {
            category: Some("Work".to_string()),
            ..Default::default()
        });
        assert_eq!(store.filters().search, "thi");
        assert_eq!(store.filters().category, "Work");
    }

    #[test]
    fn test_filtered_view_is_fresh_after_mutation() {
        let mut store = seeded_store();
        store.set_filters(FilterPatch {
            completed: Some(Some(true)),
            ..Default::default()
        });
        assert!(store.filtered_tasks().is_empty());

        let id = store.tasks()[0].id;
        store.toggle(id).unwrap();
        let filtered = store.filtered_tasks();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, id);
    }

    #[test]
    fn test_selected_task_with_dangling_id() {
        let mut store = seeded_store();
        store.select(Some(Uuid::new_v4()));
        assert!(store.selected_task().is_none());
    }
}
