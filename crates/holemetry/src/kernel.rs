use holemetry_core::Grid;

/// Square correlation template matching a dark circular depression.
///
/// Side is `2 * half_size + 1`. Pixels at offset `(x, y)` from the center
/// hold `-exp(-(x² + y²) / r²)` inside `x² + y² < r²` and 0 outside, so the
/// center is exactly -1 and everything at distance >= `circle_radius_px`
/// is zero. Callers pad `half_size` beyond the radius so correlation sees
/// context around the boundary.
pub fn correlation_template(half_size: usize, circle_radius_px: f64) -> Grid {
    let side = 2 * half_size + 1;
    let r2 = circle_radius_px * circle_radius_px;
    Grid::from_fn(side, side, |x, y| {
        let xx = x as f64 - half_size as f64;
        let yy = y as f64 - half_size as f64;
        let d2 = xx * xx + yy * yy;
        if d2 < r2 {
            -(-d2 / r2).exp()
        } else {
            0.0
        }
    })
}

/// Derivative-of-Gaussian edge filter for a boundary `edge_width_px` wide.
///
/// Sigma is `edge_width_px / 6`. The kernel is normalized by its maximum
/// value so the peak response has unit magnitude; convolving a rising ramp
/// gives a positive interior response. Returns the kernel and its effective
/// half-width `(len - 1) / 2`, which callers use to size margins and crop
/// filter-edge artifacts.
pub fn edge_kernel(edge_width_px: f64) -> (Vec<f64>, usize) {
    let sigma = (edge_width_px / 6.0).max(1e-3);
    let half = ((3.0 * sigma).ceil() as usize).max(1);

    let mut kernel: Vec<f64> = (-(half as isize)..=half as isize)
        .map(|i| {
            let x = i as f64;
            -x * (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    let peak = kernel.iter().fold(0.0f64, |m, v| m.max(*v));
    if peak > 0.0 {
        for v in &mut kernel {
            *v /= peak;
        }
    }

    let half_width = (kernel.len() - 1) / 2;
    (kernel, half_width)
}
