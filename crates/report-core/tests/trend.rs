// File: crates/report-core/tests/trend.rs
// Purpose: Least-squares fit behavior, including the publisher table trend.

use report_core::{datasets, trend};

#[test]
fn fit_recovers_collinear_points() {
    let pts = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
    let (slope, intercept) = trend::linear_fit(&pts).expect("fit");
    assert!((slope - 2.0).abs() < 1e-9);
    assert!((intercept - 1.0).abs() < 1e-9);
}

#[test]
fn degenerate_inputs_yield_none() {
    assert!(trend::linear_fit(&[]).is_none());
    assert!(trend::linear_fit(&[(1.0, 2.0)]).is_none());
    // Zero x spread has no defined slope.
    assert!(trend::linear_fit(&[(3.0, 1.0), (3.0, 9.0)]).is_none());
}

#[test]
fn publisher_quality_declines_with_volume() {
    let pts: Vec<(f64, f64)> = datasets::PUBLISHERS
        .iter()
        .map(|r| (r.volume, r.efficiency_pct))
        .collect();
    let (slope, _) = trend::linear_fit(&pts).expect("fit");
    assert!(slope < 0.0, "trend should slope downward, got {slope}");
}
