use log::{debug, warn};

use holemetry_core::{fit_circle, CancelToken, Circle, FitNorm, HeightMap};

use crate::coarse::coarse_estimate;
use crate::refine::refine_edges;
use crate::{HoleMeasurement, HoleParams, MeasureError};

/// Reference circles with a radius below this floor are treated as absent.
const MIN_SEED_RADIUS: f64 = 0.05;

/// Orchestrates one hole measurement: validation, coarse localization, edge
/// refinement, robust fit, and coordinate-frame correction.
///
/// The pipeline is linear with no retries; the only recovery is the
/// documented fallback to the coarse circle when the robust fit fails.
/// A detector holds only its validated, immutable parameters, so one
/// instance can serve concurrent runs.
pub struct HoleDetector {
    params: HoleParams,
}

impl HoleDetector {
    /// Validate `params` once and build a detector.
    pub fn new(params: HoleParams) -> Result<Self, MeasureError> {
        params.validate()?;
        Ok(Self { params })
    }

    #[inline]
    pub fn params(&self) -> &HoleParams {
        &self.params
    }

    /// Measure the hole in `hm`.
    ///
    /// `reference`, when given, is a circle in pixel units of the
    /// *uncropped* frame; it is shifted into the map's local frame before
    /// seeding the search. A reference with a radius below the sanity floor
    /// counts as absent, and the seed is then synthesized from
    /// `est_diameter_mm` at the frame center.
    pub fn measure(
        &self,
        hm: &HeightMap,
        reference: Option<Circle>,
        cancel: &CancelToken,
    ) -> Result<HoleMeasurement, MeasureError> {
        if hm.is_empty() {
            return Err(MeasureError::EmptyHeightMap);
        }
        let res = hm.resolution();
        if !(res > 0.0 && res.is_finite()) {
            return Err(MeasureError::InvalidResolution(res));
        }
        cancel.check()?;

        // Crop shift between the uncropped frame and this map, pixels.
        let offset_px = hm.offset() / res;

        let mut seed = reference
            .map(|c| c.translated(-offset_px))
            .unwrap_or_else(|| Circle::new(0.0, 0.0, -1.0));
        if seed.r < MIN_SEED_RADIUS {
            seed = Circle::new(
                hm.width() as f64 / 2.0,
                hm.height() as f64 / 2.0,
                self.params.est_diameter_mm / 2.0 / res,
            );
            debug!(
                "no usable reference circle, seeding from estimated diameter: r = {:.2}px",
                seed.r
            );
        }

        let coarse = coarse_estimate(hm, &seed, &self.params, cancel)?;
        debug!("coarse circle: ({:.2}, {:.2}) r {:.2}", coarse.cx, coarse.cy, coarse.r);

        let edge_points = refine_edges(hm, &coarse, &self.params, cancel)?;
        if edge_points.len() < self.params.min_edge_points {
            return Err(MeasureError::NotEnoughEdgePoints {
                found: edge_points.len(),
                needed: self.params.min_edge_points,
            });
        }

        let fitted = match fit_circle(&edge_points, FitNorm::L1, &coarse) {
            Some(c) => c,
            None => {
                warn!("robust circle fit failed, keeping the coarse estimate");
                coarse
            }
        };

        Ok(HoleMeasurement {
            circle: fitted.translated(offset_px),
            diameter_mm: 2.0 * fitted.r * res,
            edge_point_count: edge_points.len(),
        })
    }
}
