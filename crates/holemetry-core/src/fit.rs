use nalgebra::{Matrix3, Point2, Vector3};

use crate::Circle;

/// Norm minimized by [`fit_circle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitNorm {
    /// Least absolute deviations, robust to outlier boundary points.
    L1,
    /// Least squares.
    L2,
}

const MAX_ITERS: usize = 40;
const STEP_TOL: f64 = 1e-9;
/// Residual floor for the L1 reweighting.
const L1_EPS: f64 = 1e-6;

/// Fit a circle to `points` by iteratively reweighted Gauss-Newton on the
/// signed radial residuals `|p - c| - r`, starting from `seed`.
///
/// `FitNorm::L1` reweights each point by the inverse of its current
/// residual magnitude, which converges to the least-absolute-deviation
/// solution. Returns `None` when fewer than 3 points are given, when the
/// normal equations are singular, or when the iteration leaves the space of
/// valid circles; callers are expected to fall back to their seed.
pub fn fit_circle(points: &[Point2<f64>], norm: FitNorm, seed: &Circle) -> Option<Circle> {
    if points.len() < 3 {
        return None;
    }

    let mut cx = seed.cx;
    let mut cy = seed.cy;
    let mut r = seed.r;

    for _ in 0..MAX_ITERS {
        let mut ata = Matrix3::<f64>::zeros();
        let mut atb = Vector3::<f64>::zeros();

        for p in points {
            let dx = p.x - cx;
            let dy = p.y - cy;
            let d = (dx * dx + dy * dy).sqrt();
            if d < 1e-9 {
                continue;
            }
            let res = d - r;
            let w = match norm {
                FitNorm::L2 => 1.0,
                FitNorm::L1 => 1.0 / res.abs().max(L1_EPS),
            };
            let j = Vector3::new(-dx / d, -dy / d, -1.0);
            ata += w * j * j.transpose();
            atb -= (w * res) * j;
        }

        let delta = ata.lu().solve(&atb)?;
        cx += delta[0];
        cy += delta[1];
        r += delta[2];

        if !(cx.is_finite() && cy.is_finite() && r.is_finite()) {
            return None;
        }
        if delta.amax() < STEP_TOL {
            break;
        }
    }

    (r > 0.0).then(|| Circle::new(cx, cy, r))
}
