//! Composition of edge distances into the final selection position.
//!
//! Four qualitative cases, keyed on which edges were detected (found at a
//! finite distance strictly inside their perception range):
//!
//! | top | bottom | result |
//! |-----|--------|--------|
//! | no  | no     | `selection_y_mid` |
//! | yes | no     | top curve: 0 at the edge, rising to mid at the range |
//! | no  | yes    | mirrored bottom curve: 1 at the edge, falling to mid |
//! | yes | yes    | both curves blended by a square-root distance weight |
//!
//! The blend weights are square roots of the normalized position inside the
//! overlap of the two curves, so a curve's weight approaches 1 quickly as
//! its own edge nears instead of washing out across the transition zone.

use super::curve::curve_at_x;
use crate::model::{EdgeDistance, SelectionParams, SelectionResult};

/// Combine two probed edge distances into the selection for this frame.
///
/// Returns `selection_y = None` only when both distances are
/// [`EdgeDistance::Unknown`] (nothing laid out yet). In every other case the
/// value is defined; when neither edge is detected it equals
/// `selection_y_mid` exactly. A failed curve evaluation degrades to the
/// single-edge or no-edge case instead of propagating an error.
pub fn compose(
    params: &SelectionParams,
    top: EdgeDistance,
    bottom: EdgeDistance,
) -> SelectionResult {
    if top.is_unknown() && bottom.is_unknown() {
        return SelectionResult {
            selection_y: None,
            top_distance: top,
            bottom_distance: bottom,
        };
    }

    let mid = params.selection_y_mid;
    let top_d = top.detected_within(params.top_perception_range_px);
    let bottom_d = bottom.detected_within(params.bottom_perception_range_px);

    let selection_y = match (top_d, bottom_d) {
        (None, None) => mid,
        (Some(dt), None) => top_curve_y(params, dt).unwrap_or(mid),
        (None, Some(db)) => bottom_offset_y(params, db).map_or(mid, |off| mid + off),
        (Some(dt), Some(db)) => match (top_curve_y(params, dt), bottom_offset_y(params, db)) {
            (Some(top_y), Some(bottom_off)) => blended(params, dt, db, top_y, bottom_off),
            (Some(top_y), None) => top_y,
            (None, Some(bottom_off)) => mid + bottom_off,
            (None, None) => mid,
        },
    };

    SelectionResult {
        selection_y: Some(selection_y.clamp(0.0, 1.0)),
        top_distance: top,
        bottom_distance: bottom,
    }
}

/// Selection value for a detected top edge: 0 at the edge itself, rising to
/// `selection_y_mid` as the distance approaches the perception range.
///
/// `stiffness = 1` must be the straight ramp and the curve family reaches
/// that at zero curvature, so the parameter is inverted on the way in.
fn top_curve_y(params: &SelectionParams, distance: i32) -> Option<f64> {
    curve_at_x(
        f64::from(params.top_perception_range_px),
        params.selection_y_mid,
        1.0 - params.stiffness,
        f64::from(distance.abs()),
    )
    .map(|point| point.y)
}

/// Mid-relative offset for a detected bottom edge: `1 - selection_y_mid` at
/// the edge itself, falling to 0 as the distance approaches the range.
///
/// The curve family is point-symmetric about its center, so the mirrored
/// evaluation is expressed as `height - f(|d|)`.
fn bottom_offset_y(params: &SelectionParams, distance: i32) -> Option<f64> {
    let height = 1.0 - params.selection_y_mid;
    curve_at_x(
        f64::from(params.bottom_perception_range_px),
        height,
        1.0 - params.stiffness,
        f64::from(distance.abs()),
    )
    .map(|point| height - point.y)
}

/// Blend both detected edges.
///
/// `position` is the normalized location inside the overlap of the two
/// curves: 0 at the top-most edge of the overlap, 1 at the bottom-most.
/// The top weight is `sqrt(1 - position)`, the bottom weight
/// `sqrt(position)`, so equal distances balance exactly at
/// `selection_y_mid` while a nearing edge takes over quickly.
fn blended(
    params: &SelectionParams,
    top_distance: i32,
    bottom_distance: i32,
    top_y: f64,
    bottom_off: f64,
) -> f64 {
    let mid = params.selection_y_mid;
    let total = f64::from(top_distance.abs()) + f64::from(bottom_distance.abs());
    let position = if total > 0.0 {
        f64::from(top_distance.abs()) / total
    } else {
        0.5
    };
    let top_weight = (1.0 - position).sqrt();
    let bottom_weight = position.sqrt();
    (top_y - mid) * top_weight + bottom_off * bottom_weight + mid
}
