//! Numerics and data-model foundation for hole measurement on calibrated
//! height maps.
//!
//! This crate is intentionally small and detector-agnostic. It provides the
//! grid and height-map types, the resampling/correlation/convolution
//! primitives the measurement pipeline is built from, a robust circle fit,
//! and a cooperative cancellation token. It does *not* know anything about
//! holes, templates, or edge policies.

mod cancel;
mod conv;
mod fit;
mod geom;
mod grid;
mod heightmap;
mod interp;
mod logger;
mod resize;
mod xcorr;

pub use cancel::{CancelToken, Canceled};
pub use conv::conv_same;
pub use fit::{fit_circle, FitNorm};
pub use geom::Circle;
pub use grid::{Grid, MinMaxLoc};
pub use heightmap::HeightMap;
pub use interp::{interp_bicubic, interp_bilinear};
pub use logger::init_with_level;
pub use resize::resize_scale;
pub use xcorr::normxcorr;
