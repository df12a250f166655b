//! Closed-form optimal-angle distance (Protractor) and the gate angle.
//!
//! For unit vectors v1, v2 of interleaved 2D coordinates let
//! a = Σ (x1·x2 + y1·y2) and b = Σ (x1·y2 − y1·x2). Rotating v2 by θ gives a
//! similarity a·cosθ + b·sinθ, maximized at θ = atan(b/a); the distance is the
//! arc cosine of that similarity. Both inputs are already bucket-rotated, so
//! the optimum sits close to θ = 0 and no iterative search is needed.

use nalgebra::Vector2;

use crate::vectorize::{CanonicalVector, StartDirection};

/// Minimal angular distance between two canonical vectors of equal length.
///
/// Returns a value in [0, π]; 0 means identical up to normalization.
pub fn optimal_distance(v1: &CanonicalVector, v2: &CanonicalVector) -> f64 {
    debug_assert_eq!(v1.len(), v2.len(), "canonical vectors differ in length");
    let (a, b) = v1
        .as_slice()
        .chunks_exact(2)
        .zip(v2.as_slice().chunks_exact(2))
        .fold((0.0, 0.0), |(a, b), (p, q)| {
            (a + p[0] * q[0] + p[1] * q[1], b + p[0] * q[1] - p[1] * q[0])
        });
    let theta = if a == 0.0 && b == 0.0 {
        0.0
    } else {
        (b / a).atan()
    };
    let (sin, cos) = theta.sin_cos();
    (a * cos + b * sin).clamp(-1.0, 1.0).acos()
}

/// Angle between two start directions, tolerant to dot products drifting past ±1.
pub fn start_angle(s1: &StartDirection, s2: &StartDirection) -> f64 {
    vectors_angle(s1.as_vector(), s2.as_vector())
}

/// Angle between unit vectors via arccos of the dot product.
pub fn vectors_angle(v1: Vector2<f64>, v2: Vector2<f64>) -> f64 {
    let mut n = v1.dot(&v2);
    if !(-1.0..=1.0).contains(&n) {
        n = (n * 1e5).round() / 1e5;
    }
    n.clamp(-1.0, 1.0).acos()
}
