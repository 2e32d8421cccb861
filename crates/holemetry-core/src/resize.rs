use crate::interp::interp_bilinear;
use crate::Grid;

/// Resample `src` by the scalar factor `sc` using bilinear interpolation.
///
/// Output dimensions are `round(dim * sc)`, at least 1 per axis. The
/// mapping is origin-aligned: destination pixel `x` reads from source
/// coordinate `x / sc`, so a feature at source position `s` lands at
/// `s * sc` and coordinates convert between scales by plain
/// multiplication.
pub fn resize_scale(src: &Grid, sc: f64) -> Grid {
    let nw = ((src.width() as f64 * sc).round() as usize).max(1);
    let nh = ((src.height() as f64 * sc).round() as usize).max(1);

    Grid::from_fn(nw, nh, |x, y| interp_bilinear(src, x as f64 / sc, y as f64 / sc))
}
