//! Edge distances reported by the probe.

use std::fmt;

/// A viewport edge the probe can be pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The top edge of the viewport, probed against the content start.
    Top,
    /// The bottom edge of the viewport, probed against the content end.
    Bottom,
}

impl Edge {
    /// Lowercase name for log and status output.
    pub fn name(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }
}

/// Distance from a viewport edge to the matching content edge.
///
/// A tagged variant rather than integer sentinels, so "beyond the budget"
/// can never leak into arithmetic as a magic `i32::MIN`/`i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDistance {
    /// The list has no laid-out items yet; retry on the next scroll event.
    Unknown,

    /// The edge exists but lies beyond the perception range. Distinct from
    /// [`EdgeDistance::Unknown`]: "far away" is not "not yet known". The
    /// probed direction is retained.
    OutOfRange(Edge),

    /// Edge found: the signed explored distance in content px. `<= 0` for
    /// the top edge and `>= 0` for the bottom edge in a settled layout.
    At(i32),
}

impl EdgeDistance {
    /// The signed distance when the edge was found strictly inside
    /// `perception_range`, `None` otherwise.
    ///
    /// Re-checks the magnitude so a host-supplied `At` value outside the
    /// range can never masquerade as a detected edge.
    pub fn detected_within(&self, perception_range: i32) -> Option<i32> {
        match self {
            EdgeDistance::At(d) if d.abs() < perception_range => Some(*d),
            _ => None,
        }
    }

    /// True for [`EdgeDistance::Unknown`].
    pub fn is_unknown(&self) -> bool {
        matches!(self, EdgeDistance::Unknown)
    }
}

impl fmt::Display for EdgeDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeDistance::Unknown => write!(f, "?"),
            EdgeDistance::OutOfRange(Edge::Top) => write!(f, "-inf"),
            EdgeDistance::OutOfRange(Edge::Bottom) => write!(f, "+inf"),
            EdgeDistance::At(d) => write!(f, "{d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_within_accepts_interior_distance() {
        assert_eq!(EdgeDistance::At(-300).detected_within(1000), Some(-300));
        assert_eq!(EdgeDistance::At(999).detected_within(1000), Some(999));
    }

    #[test]
    fn detected_within_rejects_range_boundary() {
        assert_eq!(EdgeDistance::At(1000).detected_within(1000), None);
        assert_eq!(EdgeDistance::At(-1000).detected_within(1000), None);
    }

    #[test]
    fn detected_within_rejects_sentinel_and_unknown() {
        assert_eq!(EdgeDistance::OutOfRange(Edge::Top).detected_within(1000), None);
        assert_eq!(EdgeDistance::Unknown.detected_within(1000), None);
    }

    #[test]
    fn unknown_is_distinct_from_out_of_range() {
        assert!(EdgeDistance::Unknown.is_unknown());
        assert!(!EdgeDistance::OutOfRange(Edge::Bottom).is_unknown());
        assert_ne!(EdgeDistance::Unknown, EdgeDistance::OutOfRange(Edge::Bottom));
    }

    #[test]
    fn display_keeps_direction_of_sentinels() {
        assert_eq!(EdgeDistance::OutOfRange(Edge::Top).to_string(), "-inf");
        assert_eq!(EdgeDistance::OutOfRange(Edge::Bottom).to_string(), "+inf");
        assert_eq!(EdgeDistance::At(-42).to_string(), "-42");
        assert_eq!(EdgeDistance::Unknown.to_string(), "?");
    }

    #[test]
    fn edge_names() {
        assert_eq!(Edge::Top.name(), "top");
        assert_eq!(Edge::Bottom.name(), "bottom");
    }
}
