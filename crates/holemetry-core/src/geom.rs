use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Circle in pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    #[inline]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.cx, self.cy)
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.r
    }

    /// Same circle with its center shifted by `shift`.
    #[inline]
    pub fn translated(&self, shift: Vector2<f64>) -> Self {
        Self {
            cx: self.cx + shift.x,
            cy: self.cy + shift.y,
            r: self.r,
        }
    }
}
