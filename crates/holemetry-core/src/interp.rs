use crate::Grid;

#[inline]
fn get_clamped(grid: &Grid, x: isize, y: isize) -> f64 {
    let xc = x.clamp(0, grid.width() as isize - 1) as usize;
    let yc = y.clamp(0, grid.height() as isize - 1) as usize;
    grid.get(xc, yc)
}

/// Catmull-Rom interpolation of four equally spaced samples at fractional
/// position `t` in `[0, 1]` between `p1` and `p2`.
#[inline]
fn cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    p1 + 0.5
        * t
        * (p2 - p0
            + t * (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3 + t * (3.0 * (p1 - p2) + p3 - p0)))
}

/// Bicubic sample of `grid` at sub-pixel position `(x, y)`.
///
/// Uses a Catmull-Rom kernel over the 4x4 neighborhood with border samples
/// clamped. Callers that need exact interpolation keep `(x, y)` within
/// `[0, w-1) x [0, h-1)`.
pub fn interp_bicubic(grid: &Grid, x: f64, y: f64) -> f64 {
    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let tx = x - x0 as f64;
    let ty = y - y0 as f64;

    let mut rows = [0.0; 4];
    for (i, row) in rows.iter_mut().enumerate() {
        let yy = y0 + i as isize - 1;
        *row = cubic(
            get_clamped(grid, x0 - 1, yy),
            get_clamped(grid, x0, yy),
            get_clamped(grid, x0 + 1, yy),
            get_clamped(grid, x0 + 2, yy),
            tx,
        );
    }
    cubic(rows[0], rows[1], rows[2], rows[3], ty)
}

/// Bilinear sample of `grid` at sub-pixel position `(x, y)`, border clamped.
pub fn interp_bilinear(grid: &Grid, x: f64, y: f64) -> f64 {
    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_clamped(grid, x0, y0);
    let p10 = get_clamped(grid, x0 + 1, y0);
    let p01 = get_clamped(grid, x0, y0 + 1);
    let p11 = get_clamped(grid, x0 + 1, y0 + 1);

    let a = p00 + fx * (p10 - p00);
    let b = p01 + fx * (p11 - p01);
    a + fy * (b - a)
}
