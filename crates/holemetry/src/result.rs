use serde::{Deserialize, Serialize};

use holemetry_core::Circle;

/// Outcome of one measurement run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoleMeasurement {
    /// Fitted circle in pixel units, in the uncropped coordinate frame.
    pub circle: Circle,
    /// Hole diameter in millimeters (`2 * r * resolution`).
    pub diameter_mm: f64,
    /// Number of boundary points that survived refinement.
    pub edge_point_count: usize,
}
