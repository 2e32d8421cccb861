use holemetry_core::Canceled;

/// Errors surfaced by the measurement pipeline.
///
/// A failed robust fit is *not* an error: the pipeline falls back to the
/// coarse circle. Cancellation is a distinct termination class so callers
/// can tell an aborted run from a bad input.
#[derive(thiserror::Error, Debug)]
pub enum MeasureError {
    #[error("height map is empty")]
    EmptyHeightMap,
    #[error("height map resolution must be positive, got {0}")]
    InvalidResolution(f64),
    #[error("parameter `{name}` out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("unable to find circle: {found} edge points, need at least {needed}")]
    NotEnoughEdgePoints { found: usize, needed: usize },
    #[error(transparent)]
    Canceled(#[from] Canceled),
}
