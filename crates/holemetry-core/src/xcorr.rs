use crate::Grid;

/// Normalized cross-correlation of `template` against `image`, full output.
///
/// The surface has size `(w + tw - 1, h + th - 1)`. The value at `(x, y)`
/// is the zero-mean, unit-variance correlation of the template with the
/// image window whose top-left corner sits at `(x - tw + 1, y - th + 1)`;
/// border positions are evaluated over the in-bounds overlap only.
/// Degenerate windows (zero variance on either side) score 0, so a flat
/// image produces an all-zero surface.
pub fn normxcorr(template: &Grid, image: &Grid) -> Grid {
    let tw = template.width();
    let th = template.height();
    let iw = image.width();
    let ih = image.height();
    if tw == 0 || th == 0 || iw == 0 || ih == 0 {
        return Grid::new(0, 0);
    }

    let ow = iw + tw - 1;
    let oh = ih + th - 1;

    Grid::from_fn(ow, oh, |ox, oy| {
        let corner_x = ox as isize - (tw as isize - 1);
        let corner_y = oy as isize - (th as isize - 1);

        let mut n = 0.0;
        let mut sum_t = 0.0;
        let mut sum_i = 0.0;
        let mut sum_tt = 0.0;
        let mut sum_ii = 0.0;
        let mut sum_ti = 0.0;

        for ty in 0..th {
            let iy = corner_y + ty as isize;
            if iy < 0 || iy >= ih as isize {
                continue;
            }
            for tx in 0..tw {
                let ix = corner_x + tx as isize;
                if ix < 0 || ix >= iw as isize {
                    continue;
                }
                let t = template.get(tx, ty);
                let v = image.get(ix as usize, iy as usize);
                n += 1.0;
                sum_t += t;
                sum_i += v;
                sum_tt += t * t;
                sum_ii += v * v;
                sum_ti += t * v;
            }
        }

        if n < 2.0 {
            return 0.0;
        }
        let var_t = sum_tt - sum_t * sum_t / n;
        let var_i = sum_ii - sum_i * sum_i / n;
        let denom = (var_t * var_i).sqrt();
        if denom <= f64::EPSILON {
            return 0.0;
        }
        (sum_ti - sum_t * sum_i / n) / denom
    })
}
