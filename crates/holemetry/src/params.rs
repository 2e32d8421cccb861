use serde::{Deserialize, Serialize};

use crate::MeasureError;

/// Configuration for one measurement run.
///
/// A `HoleParams` value is validated once by [`crate::HoleDetector::new`]
/// and is immutable afterwards; every stage borrows the same value, so
/// independent runs never share mutable state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HoleParams {
    /// Side of the correlation template the hole is rescaled to, pixels.
    pub template_size_px: f64,
    /// Pre-filter sigma for the resized map, pixels. Carried for
    /// compatibility with recorded configurations; the current pipeline
    /// does not apply it.
    pub filter_sigma_px: f64,
    /// Expected width of the boundary transition, millimeters. Sets the
    /// derivative filter scale.
    pub edge_width_mm: f64,
    /// Full width of the radial search window straddling the coarse
    /// boundary, millimeters.
    pub edge_search_mm: f64,
    /// Arc-length spacing between boundary sample angles, millimeters.
    pub circle_sampling_mm: f64,
    /// Minimum descent steepness for a boundary crossing, degrees from
    /// horizontal. Valid range `[0, 90]`.
    pub slope_angle_deg: f64,
    /// Caller's estimate of the hole diameter, millimeters. Seeds the
    /// search when no reference circle is supplied. Must exceed 0.01.
    pub est_diameter_mm: f64,
    /// Fewer refined boundary points than this aborts the run.
    pub min_edge_points: usize,
}

impl Default for HoleParams {
    fn default() -> Self {
        Self {
            template_size_px: 35.0,
            filter_sigma_px: 0.75,
            edge_width_mm: 0.05,
            edge_search_mm: 4.0,
            circle_sampling_mm: 0.05,
            slope_angle_deg: 30.0,
            est_diameter_mm: 5.4,
            min_edge_points: 10,
        }
    }
}

impl HoleParams {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), MeasureError> {
        let positive: [(&'static str, f64); 4] = [
            ("template_size_px", self.template_size_px),
            ("edge_width_mm", self.edge_width_mm),
            ("edge_search_mm", self.edge_search_mm),
            ("circle_sampling_mm", self.circle_sampling_mm),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(MeasureError::InvalidParameter { name, value });
            }
        }
        if !(0.0..=90.0).contains(&self.slope_angle_deg) {
            return Err(MeasureError::InvalidParameter {
                name: "slope_angle_deg",
                value: self.slope_angle_deg,
            });
        }
        if !(self.est_diameter_mm > 0.01) {
            return Err(MeasureError::InvalidParameter {
                name: "est_diameter_mm",
                value: self.est_diameter_mm,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(HoleParams::default().validate().is_ok());
    }

    #[test]
    fn slope_angle_is_bounded() {
        let p = HoleParams {
            slope_angle_deg: 120.0,
            ..HoleParams::default()
        };
        assert!(matches!(
            p.validate(),
            Err(MeasureError::InvalidParameter {
                name: "slope_angle_deg",
                ..
            })
        ));
    }

    #[test]
    fn tiny_diameter_estimate_is_rejected() {
        let p = HoleParams {
            est_diameter_mm: 0.005,
            ..HoleParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn nan_parameters_are_rejected() {
        let p = HoleParams {
            edge_width_mm: f64::NAN,
            ..HoleParams::default()
        };
        assert!(p.validate().is_err());
    }
}
