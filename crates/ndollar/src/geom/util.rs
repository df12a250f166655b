use nalgebra::{Rotation2, Vector2};

use super::types::{Bounds2, Point};

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).norm()
}

/// Sum of segment lengths along the path.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

/// Arithmetic mean of the points. Zero for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Vector2::zeros();
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p);
    sum / points.len() as f64
}

/// Axis-aligned bounding box; `None` for an empty slice.
pub fn bounds(points: &[Point]) -> Option<Bounds2> {
    let first = *points.first()?;
    let mut b = Bounds2 {
        min: first,
        max: first,
    };
    for p in &points[1..] {
        b.min = b.min.inf(p);
        b.max = b.max.sup(p);
    }
    Some(b)
}

/// Angle of the vector from the first point to `center`.
#[inline]
pub fn indicative_angle(first: Point, center: Point) -> f64 {
    let d = center - first;
    d.y.atan2(d.x)
}

/// Rotate every point by `angle` (radians, CCW) about `center`.
pub fn rotate_about(points: &mut [Point], center: Point, angle: f64) {
    let rot = Rotation2::new(angle);
    for p in points.iter_mut() {
        *p = rot * (*p - center) + center;
    }
}
