//! Solver input parameters.

use serde::Deserialize;
use thiserror::Error;

/// Error returned when [`SelectionParams`] validation fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    /// A perception range was zero or negative.
    #[error("{field} must be positive (got {value})")]
    NonPositiveRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i32,
    },

    /// A ratio field lay outside `[0, 1]`.
    #[error("{field} must lie in [0, 1] (got {value})")]
    RatioOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Input parameters for the selection solver.
///
/// Read-only during a computation; the host owns mutation between frames
/// (the reader demo binds keys to `selection_y_mid` and `stiffness`).
///
/// Deserializable so the config file's `[selection]` table maps onto it;
/// missing fields take the defaults below. Deserialized values still have to
/// pass [`Self::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionParams {
    /// How far (content px) the probe searches for the content top edge
    /// before giving up. Larger values smooth the transition but cost more
    /// phantom measurements per scroll event.
    pub top_perception_range_px: i32,

    /// Equivalent of [`Self::top_perception_range_px`] for the bottom edge.
    pub bottom_perception_range_px: i32,

    /// Selection position while no content edge is within range.
    /// 0 = viewport top, 1 = viewport bottom.
    pub selection_y_mid: f64,

    /// Shape of the edge transition curve: 1 = linear ramp across the whole
    /// perception range, 0 = flat near the edge with a sharp bend after it.
    pub stiffness: f64,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            top_perception_range_px: 2500,
            bottom_perception_range_px: 2500,
            selection_y_mid: 0.5,
            stiffness: 0.5,
        }
    }
}

impl SelectionParams {
    /// Validated constructor.
    pub fn new(
        top_perception_range_px: i32,
        bottom_perception_range_px: i32,
        selection_y_mid: f64,
        stiffness: f64,
    ) -> Result<Self, ParamsError> {
        let params = Self {
            top_perception_range_px,
            bottom_perception_range_px,
            selection_y_mid,
            stiffness,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the field invariants: positive ranges, ratios in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.top_perception_range_px <= 0 {
            return Err(ParamsError::NonPositiveRange {
                field: "top_perception_range_px",
                value: self.top_perception_range_px,
            });
        }
        if self.bottom_perception_range_px <= 0 {
            return Err(ParamsError::NonPositiveRange {
                field: "bottom_perception_range_px",
                value: self.bottom_perception_range_px,
            });
        }
        if !(0.0..=1.0).contains(&self.selection_y_mid) {
            return Err(ParamsError::RatioOutOfRange {
                field: "selection_y_mid",
                value: self.selection_y_mid,
            });
        }
        if !(0.0..=1.0).contains(&self.stiffness) {
            return Err(ParamsError::RatioOutOfRange {
                field: "stiffness",
                value: self.stiffness,
            });
        }
        Ok(())
    }
}
