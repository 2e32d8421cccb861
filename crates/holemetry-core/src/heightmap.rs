use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::Grid;

/// Calibrated height map: a grid of surface heights (mm) with a physical
/// resolution and a crop offset.
///
/// `resolution` is millimeters per pixel. `offset` is the physical position
/// (mm) of this map's origin inside the uncropped capture frame; it is zero
/// for full-frame maps. The measurement pipeline only reads height maps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightMap {
    grid: Grid,
    resolution: f64,
    offset: Vector2<f64>,
}

impl HeightMap {
    pub fn new(grid: Grid, resolution: f64) -> Self {
        Self {
            grid,
            resolution,
            offset: Vector2::zeros(),
        }
    }

    /// Height map cropped out of a larger frame at `offset` (mm).
    pub fn with_offset(grid: Grid, resolution: f64, offset: Vector2<f64>) -> Self {
        Self {
            grid,
            resolution,
            offset,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Millimeters per pixel.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Crop origin inside the uncropped frame, millimeters.
    #[inline]
    pub fn offset(&self) -> Vector2<f64> {
        self.offset
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}
