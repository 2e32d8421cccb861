use approx::assert_relative_eq;
use nalgebra::Vector2;

use holemetry::{CancelToken, Circle, Grid, HeightMap, HoleDetector, HoleParams, MeasureError};

const RES_MM: f64 = 0.02;
const HOLE_RADIUS_PX: f64 = 60.0;

/// Synthetic bore: a circular depression 0.5 mm deep with a sharp tanh wall
/// and deterministic low-amplitude surface roughness.
fn bore_grid(w: usize, h: usize, cx: f64, cy: f64, r: f64) -> Grid {
    Grid::from_fn(w, h, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        let d = (dx * dx + dy * dy).sqrt();
        let z = -0.25 * (1.0 - ((d - r) / 0.25).tanh());
        z + 0.002 * ((x * 13 + y * 7) as f64).sin()
    })
}

fn bore_map() -> HeightMap {
    HeightMap::new(bore_grid(200, 200, 96.0, 96.0, HOLE_RADIUS_PX), RES_MM)
}

fn detector() -> HoleDetector {
    let params = HoleParams {
        est_diameter_mm: 2.0 * HOLE_RADIUS_PX * RES_MM,
        ..HoleParams::default()
    };
    HoleDetector::new(params).unwrap()
}

#[test]
fn measures_synthetic_bore_without_reference() {
    let result = detector()
        .measure(&bore_map(), None, &CancelToken::new())
        .unwrap();

    assert!(
        (result.circle.cx - 96.0).abs() <= 1.0 && (result.circle.cy - 96.0).abs() <= 1.0,
        "center ({:.2}, {:.2}) further than 1px from truth",
        result.circle.cx,
        result.circle.cy
    );

    let true_diameter_mm = 2.0 * HOLE_RADIUS_PX * RES_MM;
    let rel_err = (result.diameter_mm - true_diameter_mm).abs() / true_diameter_mm;
    assert!(
        rel_err <= 0.02,
        "diameter {:.4} mm deviates {:.2}% from {:.4} mm",
        result.diameter_mm,
        100.0 * rel_err,
        true_diameter_mm
    );
    assert!(result.edge_point_count >= 10);
}

#[test]
fn reference_circle_seeds_the_same_answer() {
    let det = detector();
    let hm = bore_map();
    let cancel = CancelToken::new();

    let seeded = det
        .measure(&hm, Some(Circle::new(99.0, 93.0, 62.0)), &cancel)
        .unwrap();
    assert!((seeded.circle.cx - 96.0).abs() <= 1.0);
    assert!((seeded.circle.cy - 96.0).abs() <= 1.0);
}

#[test]
fn undersized_reference_radius_counts_as_absent() {
    let det = detector();
    let hm = bore_map();
    let cancel = CancelToken::new();

    let implicit = det.measure(&hm, None, &cancel).unwrap();
    let explicit = det
        .measure(&hm, Some(Circle::new(40.0, 170.0, 0.01)), &cancel)
        .unwrap();
    assert_eq!(explicit, implicit);
}

#[test]
fn flat_map_fails_with_insufficient_edge_points() {
    let hm = HeightMap::new(Grid::new(200, 200), RES_MM);
    let err = detector()
        .measure(&hm, None, &CancelToken::new())
        .unwrap_err();
    assert!(
        matches!(err, MeasureError::NotEnoughEdgePoints { .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn crop_offset_shifts_the_reported_center() {
    let det = detector();
    let cancel = CancelToken::new();

    let plain = det.measure(&bore_map(), None, &cancel).unwrap();

    let offset_mm = Vector2::new(1.0, 1.0); // 50px at 0.02 mm/px
    let cropped = HeightMap::with_offset(
        bore_grid(200, 200, 96.0, 96.0, HOLE_RADIUS_PX),
        RES_MM,
        offset_mm,
    );
    let shifted = det.measure(&cropped, None, &cancel).unwrap();

    let shift_px = offset_mm / RES_MM;
    assert_relative_eq!(shifted.circle.cx, plain.circle.cx + shift_px.x, epsilon = 1e-9);
    assert_relative_eq!(shifted.circle.cy, plain.circle.cy + shift_px.y, epsilon = 1e-9);
    assert_relative_eq!(shifted.circle.r, plain.circle.r, epsilon = 1e-9);
    assert_relative_eq!(shifted.diameter_mm, plain.diameter_mm, epsilon = 1e-9);
}

#[test]
fn canceled_token_aborts_with_distinct_error() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let err = detector().measure(&bore_map(), None, &cancel).unwrap_err();
    assert!(matches!(err, MeasureError::Canceled(_)));
}

#[test]
fn repeated_runs_are_identical() {
    let det = detector();
    let hm = bore_map();
    let cancel = CancelToken::new();
    let a = det.measure(&hm, None, &cancel).unwrap();
    let b = det.measure(&hm, None, &cancel).unwrap();
    assert_eq!(a, b);
}
