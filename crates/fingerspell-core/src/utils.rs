//! Utility functions shared across the workspace.

/// Planar Euclidean distance between two points.
#[must_use]
pub fn planar_distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx.hypot(dy)
}

/// Absolute horizontal gap between two x coordinates.
#[must_use]
pub fn horizontal_gap(a: f32, b: f32) -> f32 {
    (a - b).abs()
}

/// Percentage of `target` covered by `count`, capped at 100.
///
/// A zero target counts as fully covered.
#[must_use]
pub fn capped_percentage(count: usize, target: usize) -> f64 {
    if target == 0 {
        return 100.0;
    }
    let ratio = count as f64 / target as f64 * 100.0;
    ratio.min(100.0)
}
