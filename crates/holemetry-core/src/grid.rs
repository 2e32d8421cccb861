use serde::{Deserialize, Serialize};

/// Row-major 2-D grid of `f64` samples.
///
/// Used for height samples, correlation templates, and correlation surfaces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

/// Extremes of a grid together with their first scan-order positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxLoc {
    pub min: f64,
    pub max: f64,
    /// `(x, y)` of the first minimum in row-major scan order.
    pub min_pos: (usize, usize),
    /// `(x, y)` of the first maximum in row-major scan order.
    pub max_pos: (usize, usize),
}

impl Grid {
    /// Zero-filled grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    pub fn filled(width: usize, height: usize, value: f64) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build a grid by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = value;
    }

    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Global extremes with their locations.
    ///
    /// Comparisons are strict, so on a flat grid (or any tie) the reported
    /// position is the first one in row-major scan order. Returns `None` for
    /// an empty grid.
    pub fn min_max_loc(&self) -> Option<MinMaxLoc> {
        if self.data.is_empty() {
            return None;
        }
        let mut out = MinMaxLoc {
            min: self.data[0],
            max: self.data[0],
            min_pos: (0, 0),
            max_pos: (0, 0),
        };
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.get(x, y);
                if v < out.min {
                    out.min = v;
                    out.min_pos = (x, y);
                }
                if v > out.max {
                    out.max = v;
                    out.max_pos = (x, y);
                }
            }
        }
        Some(out)
    }
}
