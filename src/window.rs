//! Viewport windower: which rows of a long list intersect the viewport.
//!
//! Pure geometry — no knowledge of task semantics. The caller reserves
//! [`total_extent`] of scrollable space, asks for a window on every
//! scroll-offset change, and renders only the rows inside it.

use serde::Serialize;

/// Contiguous half-open index range `[start, end)` into an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleWindow {
    pub start: usize,
    pub end: usize,
}

impl VisibleWindow {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Scrolling geometry supplied by the rendering caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Fixed extent of one row, in the caller's units (pixels, cells)
    pub item_extent: f64,
    /// Extent of the scrollable container
    pub container_extent: f64,
    /// Current scroll position, from the top of the content
    pub scroll_offset: f64,
    /// Extra rows rendered above and below the strictly visible band
    pub overscan: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            item_extent: 120.0,
            container_extent: 600.0,
            scroll_offset: 0.0,
            overscan: 5,
        }
    }
}

impl Viewport {
    /// The window of `item_count` rows this viewport can see.
    pub fn window(&self, item_count: usize) -> VisibleWindow {
        compute_window(
            item_count,
            self.item_extent,
            self.container_extent,
            self.scroll_offset,
            self.overscan,
        )
    }

    /// Scrollable content size the caller must reserve.
    pub fn total_extent(&self, item_count: usize) -> f64 {
        total_extent(item_count, self.item_extent)
    }

    /// Offset of row `index` from the top of the content.
    pub fn item_offset(&self, index: usize) -> f64 {
        index as f64 * self.item_extent
    }
}

/// Compute the visible window over `item_count` rows of fixed extent.
///
/// The start row is the first row intersecting the scroll offset, pulled
/// up by `overscan` (floored at zero); the end bound adds the visible row
/// count plus `2 * overscan`, compensating for the start having already
/// been pulled up, so the rendered band stays roughly centered on the
/// visible band. The result always satisfies
/// `0 <= start <= end <= item_count`.
///
/// # Panics
///
/// Panics if `item_extent` or `container_extent` is not strictly
/// positive. That is a misconfigured caller, not user input, and must
/// fail loudly rather than clamp.
pub fn compute_window(
    item_count: usize,
    item_extent: f64,
    container_extent: f64,
    scroll_offset: f64,
    overscan: usize,
) -> VisibleWindow {
    assert!(
        item_extent > 0.0,
        "item_extent must be positive, got {item_extent}"
    );
    assert!(
        container_extent > 0.0,
        "container_extent must be positive, got {container_extent}"
    );

    let first_row = (scroll_offset.max(0.0) / item_extent).floor() as usize;
    let start = first_row.saturating_sub(overscan).min(item_count);
    let visible_count = (container_extent / item_extent).ceil() as usize;
    let end = item_count.min(start + visible_count + 2 * overscan);

    VisibleWindow { start, end }
}

/// Scrollable content size for `item_count` rows of `item_extent` each.
pub fn total_extent(item_count: usize, item_extent: f64) -> f64 {
    item_count as f64 * item_extent
}
