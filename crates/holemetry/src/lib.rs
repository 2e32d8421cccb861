//! Sub-pixel measurement of a circular hole in a calibrated height map.
//!
//! The measurement runs in two geometric stages:
//!
//! 1. **Coarse localization** — the height map is rescaled so the expected
//!    hole matches a fixed-size correlation template, a normalized
//!    cross-correlation surface is weighted by a Gaussian prior around the
//!    expected location, and its peak gives the approximate center.
//! 2. **Edge refinement** — radial height profiles are sampled around the
//!    coarse circle with bicubic interpolation, filtered with a
//!    derivative-of-Gaussian kernel, and one sub-pixel boundary point per
//!    angle is selected by a slope-threshold policy that prefers the outer
//!    wall of chamfered or burred bores.
//!
//! The boundary points are then fitted with a robust L1 circle fit and the
//! diameter reported in millimeters.
//!
//! # Quick start
//! ```no_run
//! use holemetry::{CancelToken, HeightMap, HoleDetector, HoleParams};
//!
//! # fn run(hm: &HeightMap) -> Result<(), holemetry::MeasureError> {
//! let detector = HoleDetector::new(HoleParams::default())?;
//! let result = detector.measure(hm, None, &CancelToken::new())?;
//! println!("diameter: {:.3} mm", result.diameter_mm);
//! # Ok(())
//! # }
//! ```

mod coarse;
mod detector;
mod error;
mod kernel;
mod params;
mod refine;
mod result;

pub use coarse::coarse_estimate;
pub use detector::HoleDetector;
pub use error::MeasureError;
pub use kernel::{correlation_template, edge_kernel};
pub use params::HoleParams;
pub use refine::refine_edges;
pub use result::HoleMeasurement;

pub use holemetry_core::{CancelToken, Canceled, Circle, Grid, HeightMap};
