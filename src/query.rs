//! Task query engine: filtering, sorting, and aggregate stats.
//!
//! Every function here is a pure derivation over the task collection.
//! Wall-clock time is injected by the caller so stats are deterministic
//! under test.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::model::{FilterSpec, SortKey, SortOrder, Task};

/// Aggregate counts over the full (unfiltered) task collection.
/// Recomputed from scratch on every read; never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// Due strictly before `now` and not completed
    pub overdue: usize,
    /// Due within [start of today, start of tomorrow), completion-independent
    pub today: usize,
    /// Due within [start of today, start of today + 7 days)
    pub this_week: usize,
}

/// Percentage of completed tasks, rounded to the nearest integer.
/// Zero when the collection is empty. A presentation helper, not part
/// of the stats snapshot itself.
pub fn completion_rate(stats: &TaskStats) -> u32 {
    if stats.total == 0 {
        return 0;
    }
    ((stats.completed as f64 / stats.total as f64) * 100.0).round() as u32
}

/// Filter and sort the collection per `spec`, returning a new sequence.
/// The input is never mutated. The sort is stable: tasks comparing equal
/// keep their relative input order.
pub fn filter_and_sort(tasks: &[Task], spec: &FilterSpec) -> Vec<Task> {
    tracing::trace!(
        total = tasks.len(),
        search = %spec.search,
        category = %spec.category,
        "filter_and_sort"
    );
    let mut out: Vec<Task> = tasks.iter().filter(|t| matches(t, spec)).cloned().collect();
    out.sort_by(|a, b| compare(a, b, spec.sort_by, spec.sort_order));
    out
}

/// Conjunction of all active predicates; inactive predicates pass everything.
fn matches(task: &Task, spec: &FilterSpec) -> bool {
    if !spec.search.is_empty() {
        let needle = spec.search.to_lowercase();
        let hit = task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
            || task.tags.iter().any(|t| t.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }
    if !spec.category.is_empty() && task.category != spec.category {
        return false;
    }
    if let Some(priority) = spec.priority
        && task.priority != priority
    {
        return false;
    }
    if let Some(completed) = spec.completed
        && task.completed != completed
    {
        return false;
    }
    true
}

fn compare(a: &Task, b: &Task, key: SortKey, order: SortOrder) -> Ordering {
    let base = match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortKey::DueDate => {
            // Undated tasks sort after all dated tasks, in both directions;
            // the direction only applies between two dated tasks.
            return match (a.due_date, b.due_date) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(x), Some(y)) => order.apply(x.cmp(&y)),
            };
        }
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    order.apply(base)
}

/// Compute the stats snapshot for `tasks` as of `now`.
///
/// Day boundaries are half-open: a task due at exactly the start of
/// tomorrow is not "today", and a task due at exactly `now` is not
/// overdue.
pub fn compute_stats(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let start_of_today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let start_of_tomorrow = start_of_today + Duration::days(1);
    let week_ahead = start_of_today + Duration::days(7);

    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for task in tasks {
        if task.completed {
            stats.completed += 1;
        }
        if let Some(due) = task.due_date {
            if due < now && !task.completed {
                stats.overdue += 1;
            }
            if due >= start_of_today && due < start_of_tomorrow {
                stats.today += 1;
            }
            if due >= start_of_today && due < week_ahead {
                stats.this_week += 1;
            }
        }
    }
    stats
}
