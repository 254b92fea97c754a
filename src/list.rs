//! List presentation adapter: composes the query engine's ordered output
//! with the viewport windower and emits only the rows that must be
//! materialized. Stateless.

use crate::model::Task;
use crate::window::{Viewport, VisibleWindow};

/// One row the caller must actually render, tagged with its absolute
/// position in the ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowItem<'a, T> {
    pub item: &'a T,
    /// Absolute index into the full ordered sequence
    pub index: usize,
}

/// Slice `items[window.start..window.end)`, pairing each element with
/// its absolute index. Out-of-range bounds are clamped to the slice.
pub fn materialize<T>(items: &[T], window: VisibleWindow) -> Vec<WindowItem<'_, T>> {
    let start = window.start.min(items.len());
    let end = window.end.min(items.len());
    items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, item)| WindowItem {
            item,
            index: start + offset,
        })
        .collect()
}

/// The windowed view of one ordered task sequence.
#[derive(Debug)]
pub struct WindowedList<'a> {
    pub window: VisibleWindow,
    pub items: Vec<WindowItem<'a, Task>>,
    /// Scrollable content size the caller must reserve
    pub total_extent: f64,
}

/// Window an already filtered/sorted task sequence through `viewport`.
pub fn window_tasks<'a>(ordered: &'a [Task], viewport: &Viewport) -> WindowedList<'a> {
    let window = viewport.window(ordered.len());
    WindowedList {
        window,
        items: materialize(ordered, window),
        total_extent: viewport.total_extent(ordered.len()),
    }
}
