use log::debug;

use holemetry_core::{normxcorr, resize_scale, CancelToken, Canceled, Circle, HeightMap};

use crate::kernel::correlation_template;
use crate::HoleParams;

/// Coarse template-correlation localization of the hole.
///
/// Rescales the map so the seeded hole matches the template size, weights
/// the normalized cross-correlation surface with a Gaussian prior around
/// the seed, and maps the peak back to original coordinates. The radius is
/// *not* re-estimated here; the returned circle keeps the seed radius.
///
/// `seed.r` must be positive (the orchestrator guarantees it).
pub fn coarse_estimate(
    hm: &HeightMap,
    seed: &Circle,
    params: &HoleParams,
    cancel: &CancelToken,
) -> Result<Circle, Canceled> {
    // Bring the expected hole to template scale.
    let sc = params.template_size_px / (2.0 * seed.r);
    let small = resize_scale(hm.grid(), sc);

    // Template padded ~10% beyond the circle so correlation sees context
    // around the boundary.
    let circle_radius_px = params.template_size_px / 2.0;
    let half_size = (circle_radius_px * 1.1).round() as usize;
    let template = correlation_template(half_size, circle_radius_px);

    let mut surface = normxcorr(&template, &small);

    // Seed mapped into correlation-surface coordinates.
    let cx = seed.cx * sc + half_size as f64;
    let cy = seed.cy * sc + half_size as f64;
    let cr = seed.r * sc;

    // Gaussian spatial prior: bias the peak search toward the expected
    // location and suppress false matches elsewhere.
    let denom = 16.0 * cr * cr;
    for y in 0..surface.height() {
        cancel.check()?;
        let yy = y as f64 - cy;
        for x in 0..surface.width() {
            let xx = x as f64 - cx;
            let wt = (-(xx * xx + yy * yy) / denom).exp();
            surface.set(x, y, surface.get(x, y) * wt);
        }
    }

    // On a flat surface every value ties at zero and the first scan-order
    // position wins; that is deliberate, not an error.
    let Some(peak) = surface.min_max_loc() else {
        return Ok(*seed);
    };
    debug!(
        "coarse correlation peak {:.4} at {:?} (scale {:.4})",
        peak.max, peak.max_pos, sc
    );

    let center_x = (peak.max_pos.0 as f64 - half_size as f64) / sc;
    let center_y = (peak.max_pos.1 as f64 - half_size as f64) / sc;
    Ok(Circle::new(center_x, center_y, seed.r))
}
