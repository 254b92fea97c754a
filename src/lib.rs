//! In-memory task-list core.
//!
//! Two coupled pieces do the real work: the viewport windower
//! ([`window`]), which keeps an arbitrarily long list fast by computing
//! only the rows intersecting the viewport, and the query engine
//! ([`query`]), which filters, sorts, and aggregates the task
//! collection on every read. The presentation adapter ([`list`])
//! composes the two, and the store ([`store`]) owns all mutable state
//! behind an enumerated set of mutation entry points.
//!
//! Everything is synchronous and single-threaded; the only
//! timing-flavored behavior lives in [`timer`], which provides
//! poll-driven debounce and interval policies for the host event loop.

pub mod list;
pub mod model;
pub mod query;
pub mod store;
pub mod timer;
pub mod window;

pub use list::{WindowItem, WindowedList, materialize, window_tasks};
pub use model::{
    Category, FilterPatch, FilterSpec, Priority, SortKey, SortOrder, Task, TaskDraft, TaskPatch,
};
pub use query::{TaskStats, completion_rate, compute_stats, filter_and_sort};
pub use store::{StoreError, TaskStore};
pub use timer::{Debouncer, IntervalTimer, SEARCH_DEBOUNCE};
pub use window::{Viewport, VisibleWindow, compute_window, total_extent};
