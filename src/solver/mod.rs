//! The selection-position solver.
//!
//! Pure, synchronous, stateless per scroll event: probe the two viewport
//! edges within their perception budgets, then compose the distances into a
//! single normalized selection position. Everything runs on the thread that
//! delivers scroll events and holds no mutable cross-call state; the only
//! shared resource is the host's layout, read through [`ListLayout`] and
//! never mutated.

pub mod compose;
pub mod curve;
pub mod probe;

pub use compose::compose;
pub use probe::{edge_distance, ItemBounds, ItemSizer, ListLayout};

use crate::model::{Edge, SelectionParams, SelectionResult};

/// Probe both edges of `layout` and compose the selection for this frame.
///
/// Convenience entry point for hosts; equivalent to two [`edge_distance`]
/// calls followed by [`compose`].
pub fn solve<L, S>(layout: &L, sizer: &mut S, params: &SelectionParams) -> SelectionResult
where
    L: ListLayout + ?Sized,
    S: ItemSizer + ?Sized,
{
    let top = edge_distance(layout, sizer, Edge::Top, params.top_perception_range_px);
    let bottom = edge_distance(layout, sizer, Edge::Bottom, params.bottom_perception_range_px);
    compose(params, top, bottom)
}
