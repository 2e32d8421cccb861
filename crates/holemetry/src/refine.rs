use log::debug;
use nalgebra::Point2;

use holemetry_core::{conv_same, interp_bicubic, CancelToken, Canceled, Circle, HeightMap};

use crate::kernel::edge_kernel;
use crate::HoleParams;

/// Numerical floor below which a filtered arc-length derivative is treated
/// as unusable for slope evaluation.
const DT_FLOOR: f64 = 1e-3;

#[inline]
fn inside(p: &Point2<f64>, width: f64, height: f64) -> bool {
    p.x >= 0.0 && p.y >= 0.0 && p.x < width - 1.0 && p.y < height - 1.0
}

/// Choose the edge sample index for one radial profile.
///
/// `dz`/`dt` are the filtered height and arc-length derivatives of a
/// profile sampled outer to inner. Candidates are restricted to
/// `[half_width, half_width + 2 * margin]`, the window free of filter-edge
/// artifacts. The steepest descent wins by default; when its slope clears
/// `slope_threshold`, the scan restarts from the window start and the
/// *first* index clearing the threshold wins instead, so the outer wall of
/// a chamfered or burred hole is treated as the true edge.
pub(crate) fn select_edge_index(
    dz: &[f64],
    dt: &[f64],
    half_width: usize,
    margin: usize,
    slope_threshold: f64,
) -> usize {
    let mut best = half_width;
    let mut best_dz = dz[best];
    for i in 0..=2 * margin {
        let ix = i + half_width;
        if dz[ix] < best_dz {
            best_dz = dz[ix];
            best = ix;
        }
    }

    let slope = dz[best] / dt[best];
    if dt[best].abs() > DT_FLOOR && slope < slope_threshold {
        for ix in half_width..best {
            if dt[ix].abs() > DT_FLOOR && dz[ix] / dt[ix] < slope_threshold {
                return ix;
            }
        }
    }
    best
}

/// Refine a coarse circle into a set of sub-pixel boundary points.
///
/// Samples one radial profile per angle across the coarse boundary,
/// filters it with the derivative-of-Gaussian kernel, and emits at most
/// one edge point per angle. Angles whose ray endpoints leave the valid
/// image interior are skipped, so the result can be shorter than the
/// requested angle count; the orchestrator decides whether the remainder
/// is enough.
pub fn refine_edges(
    hm: &HeightMap,
    circle: &Circle,
    params: &HoleParams,
    cancel: &CancelToken,
) -> Result<Vec<Point2<f64>>, Canceled> {
    let res = hm.resolution();
    let r = circle.r;
    let width = hm.width() as f64;
    let height = hm.height() as f64;

    // One angle per `circle_sampling_mm` of circumference.
    let ntheta = (std::f64::consts::TAU * r * res / params.circle_sampling_mm).round() as usize;

    let edge_width_px = (params.edge_width_mm / res).round();
    let (kernel, half_width) = edge_kernel(edge_width_px);

    // Half-width of the search window straddling the boundary, capped so
    // the inner ray end cannot pass beyond the far side of the hole.
    let margin = r.min(params.edge_search_mm / res / 2.0).round() as usize;

    // Profiles descend across the boundary, hence the sign.
    let slope_threshold = -params.slope_angle_deg.to_radians().tan();

    let reach = (margin + half_width) as f64;
    let np = 2 * (margin + half_width) + 1;

    let mut edge_points: Vec<Point2<f64>> = Vec::with_capacity(ntheta);
    let mut points = Vec::with_capacity(np);
    let mut zvals = Vec::with_capacity(np);
    let mut tvals = Vec::with_capacity(np);

    for i in 0..ntheta {
        cancel.check()?;
        let theta = std::f64::consts::TAU * i as f64 / ntheta as f64;
        let (sin_t, cos_t) = theta.sin_cos();

        // Inner and outer ray ends straddling the coarse boundary.
        let p0 = Point2::new(
            circle.cx + (r - reach) * cos_t,
            circle.cy + (r - reach) * sin_t,
        );
        let p1 = Point2::new(
            circle.cx + (r + reach) * cos_t,
            circle.cy + (r + reach) * sin_t,
        );
        if !(inside(&p0, width, height) && inside(&p1, width, height)) {
            continue;
        }

        // Sample outer to inner; arc length measured from the outer end in
        // physical units.
        points.clear();
        zvals.clear();
        tvals.clear();
        for k in 0..np {
            let t = k as f64 / (np - 1) as f64;
            let p = Point2::new(p1.x + (p0.x - p1.x) * t, p1.y + (p0.y - p1.y) * t);
            zvals.push(interp_bicubic(hm.grid(), p.x, p.y));
            tvals.push(res * (p - p1).norm());
            points.push(p);
        }

        let dz = conv_same(&zvals, &kernel);
        let dt = conv_same(&tvals, &kernel);

        let ix = select_edge_index(&dz, &dt, half_width, margin, slope_threshold);
        edge_points.push(points[ix]);
    }

    debug!(
        "edge refinement: {} points from {} angles (margin {}px, filter half-width {}px)",
        edge_points.len(),
        ntheta,
        margin,
        half_width
    );
    Ok(edge_points)
}
