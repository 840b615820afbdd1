//! Bounded probing of the distance between viewport edges and content edges.
//!
//! Hosts expose their current layout through the [`ListLayout`] and
//! [`ItemSizer`] capability traits; the probe never depends on a concrete UI
//! toolkit. The scan is budgeted by a perception range, so its cost is
//! proportional to `range / average item height`, never to the content size.
//! That bound is the reason the probe exists: the host cannot afford to lay
//! out the whole list on every scroll tick.

use tracing::trace;

use crate::model::{Edge, EdgeDistance};

/// Viewport-relative bounding box of a laid-out item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemBounds {
    /// Top of the item relative to the viewport top; negative when the item
    /// starts above the visible area.
    pub y: i32,
    /// Item height in content px.
    pub height: i32,
}

/// Read-only view of a virtualized list's current layout.
///
/// Bounds are available for laid-out (visible) items only; everything else
/// is measured on demand through [`ItemSizer`]. The probe treats the layout
/// as frozen for the duration of a call.
pub trait ListLayout {
    /// Total number of items in the data set.
    fn item_count(&self) -> usize;

    /// Index of the first (top-most) laid-out item, `None` before the first
    /// layout pass or when the list is empty.
    fn first_visible(&self) -> Option<usize>;

    /// Index of the last (bottom-most) laid-out item.
    fn last_visible(&self) -> Option<usize>;

    /// Bounding box of the item at `index`, `None` unless it is laid out.
    fn item_bounds(&self, index: usize) -> Option<ItemBounds>;

    /// Viewport height in content px.
    fn viewport_height(&self) -> i32;
}

/// Phantom measurement of items that are not laid out.
///
/// `measure` may be called for any index in `0..item_count()`; the item is
/// sized off-screen, without being bound into the visible layout.
pub trait ItemSizer {
    /// Height in content px the item at `index` would occupy.
    fn measure(&mut self, index: usize) -> i32;
}

/// Distance from the given viewport edge to the matching content edge.
///
/// Starting from the first (top) or last (bottom) laid-out item, the probe
/// accumulates a signed explored distance and marches outward, measuring one
/// adjacent off-screen item per step, until either the budget is exhausted
/// (`|explored| >= perception_range`, yielding [`EdgeDistance::OutOfRange`])
/// or the data set runs out (yielding the finite [`EdgeDistance::At`]).
/// Zero-height items cannot stall the scan: index exhaustion terminates it
/// regardless of the accumulated distance.
///
/// # Panics
///
/// Panics when the layout reports a visible item without laid-out bounds.
/// That is a host contract violation (an inconsistent layout snapshot), not
/// a recoverable condition.
pub fn edge_distance<L, S>(
    layout: &L,
    sizer: &mut S,
    edge: Edge,
    perception_range: i32,
) -> EdgeDistance
where
    L: ListLayout + ?Sized,
    S: ItemSizer + ?Sized,
{
    let anchor = match edge {
        Edge::Top => layout.first_visible(),
        Edge::Bottom => layout.last_visible(),
    };
    let Some(anchor) = anchor else {
        return EdgeDistance::Unknown;
    };
    let bounds = layout
        .item_bounds(anchor)
        .unwrap_or_else(|| panic!("item {anchor} is reported visible but has no laid-out bounds"));

    let mut explored: i32;
    let mut steps = 0usize;
    match edge {
        Edge::Top => {
            explored = bounds.y;
            let mut index = anchor;
            while explored.abs() < perception_range && index > 0 {
                index -= 1;
                explored -= sizer.measure(index);
                steps += 1;
            }
        }
        Edge::Bottom => {
            explored = bounds.y + bounds.height - layout.viewport_height();
            let mut index = anchor + 1;
            let count = layout.item_count();
            while explored.abs() < perception_range && index < count {
                explored += sizer.measure(index);
                index += 1;
                steps += 1;
            }
        }
    }

    if explored.abs() >= perception_range {
        trace!(edge = edge.name(), steps, "edge beyond perception range");
        EdgeDistance::OutOfRange(edge)
    } else {
        trace!(edge = edge.name(), steps, distance = explored, "edge found");
        EdgeDistance::At(explored)
    }
}
