//! Canonical (Protractor) vectors and start directions of normalized paths.
//!
//! - `vectorize`: snap the first point's angle about the origin to the nearest
//!   multiple of π/4, rotate by the snap offset, flatten `x0, y0, x1, y1, ...`
//!   and scale to unit length. Orientation is bucketed into 8 sectors instead
//!   of being discarded, so mirrored or direction-sensitive shapes stay apart.
//! - `start_direction`: unit vector from point 0 to point k of the normalized
//!   (not bucketed) path. Only used by the recognizer's gate; a path that
//!   returns to its start at point k has none and never passes the gate.

use nalgebra::{DVector, Vector2};

use crate::cfg::RecognizerCfg;
use crate::error::GestureError;
use crate::geom::Point;

const SECTOR: f64 = std::f64::consts::FRAC_PI_4;

/// Unit-length flattened coordinates of a normalized, bucket-rotated path.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalVector(DVector<f64>);

impl CanonicalVector {
    /// Wrap raw coordinates, scaling them to unit length.
    pub fn from_raw(raw: DVector<f64>) -> Result<Self, GestureError> {
        let norm = raw.norm();
        if !(norm.is_finite() && norm > 0.0) {
            return Err(GestureError::DegenerateVector);
        }
        Ok(Self(raw / norm))
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Number of scalar components (2·N).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Unit heading of the first `k` points of a normalized path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartDirection(Vector2<f64>);

impl StartDirection {
    pub fn new(v: Vector2<f64>) -> Result<Self, GestureError> {
        let norm = v.norm();
        if !(norm.is_finite() && norm > 0.0) {
            return Err(GestureError::DegenerateVector);
        }
        Ok(Self(v / norm))
    }

    #[inline]
    pub fn as_vector(&self) -> Vector2<f64> {
        self.0
    }
}

/// One expanded variant of a learned gesture. Built once, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    pub vector: CanonicalVector,
    /// `None` when point k coincides with point 0.
    pub start: Option<StartDirection>,
}

impl Template {
    /// Build from an already normalized path.
    pub fn from_normalized(points: &[Point], cfg: &RecognizerCfg) -> Result<Self, GestureError> {
        Ok(Self {
            vector: vectorize(points)?,
            start: start_direction(points, cfg.start_index).ok(),
        })
    }
}

/// Nearest multiple of π/4 to `angle`.
#[inline]
pub fn snap_angle(angle: f64) -> f64 {
    SECTOR * ((angle + SECTOR / 2.0) / SECTOR).floor()
}

/// Bucket-rotate and flatten a normalized path into a unit vector.
pub fn vectorize(points: &[Point]) -> Result<CanonicalVector, GestureError> {
    let first = points.first().ok_or(GestureError::DegenerateVector)?;
    let angle = first.y.atan2(first.x);
    let (sin, cos) = (snap_angle(angle) - angle).sin_cos();
    let raw = DVector::from_iterator(
        points.len() * 2,
        points
            .iter()
            .flat_map(|p| [p.x * cos - p.y * sin, p.y * cos + p.x * sin]),
    );
    CanonicalVector::from_raw(raw)
}

/// Direction from `points[0]` to `points[k]`.
pub fn start_direction(points: &[Point], k: usize) -> Result<StartDirection, GestureError> {
    let (first, kth) = match (points.first(), points.get(k)) {
        (Some(a), Some(b)) => (*a, *b),
        _ => return Err(GestureError::DegenerateVector),
    };
    StartDirection::new(kth - first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn snap_to_nearest_sector() {
        let d = std::f64::consts::PI / 180.0;
        assert!((snap_angle(10.0 * d) - 0.0).abs() < 1e-12);
        assert!((snap_angle(30.0 * d) - SECTOR).abs() < 1e-12);
        assert!((snap_angle(-100.0 * d) + 2.0 * SECTOR).abs() < 1e-12);
        assert!((snap_angle(179.0 * d) - 4.0 * SECTOR).abs() < 1e-12);
    }

    #[test]
    fn vector_is_unit_and_first_point_on_sector() {
        let pts = vec![vector![3.0, 1.0], vector![-1.0, 2.0], vector![-2.0, -3.0]];
        let v = vectorize(&pts).unwrap();
        assert_eq!(v.len(), 6);
        let norm: f64 = v.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        // (3,1) is ~18.4° → snapped to 0°, so the first point lands on the x axis.
        assert!(v.as_slice()[1].abs() < 1e-12);
        assert!(v.as_slice()[0] > 0.0);
    }

    #[test]
    fn zero_vector_is_degenerate() {
        let pts = vec![vector![0.0, 0.0]; 4];
        assert_eq!(vectorize(&pts), Err(GestureError::DegenerateVector));
        assert_eq!(
            start_direction(&pts, 2),
            Err(GestureError::DegenerateVector)
        );
    }

    #[test]
    fn start_direction_is_unit() {
        let pts: Vec<Point> = (0..20).map(|i| vector![i as f64, i as f64]).collect();
        let s = start_direction(&pts, 12).unwrap().as_vector();
        assert!((s.norm() - 1.0).abs() < 1e-12);
        assert!((s.x - s.y).abs() < 1e-12);
        assert!(start_direction(&pts[..5], 12).is_err());
    }

    #[test]
    fn closed_loop_at_start_index_has_no_start_direction() {
        let cfg = RecognizerCfg {
            resample_count: 5,
            start_index: 4,
            ..RecognizerCfg::default()
        };
        let pts = vec![
            vector![-1.0, -1.0],
            vector![1.0, -1.0],
            vector![1.0, 1.0],
            vector![-1.0, 1.0],
            vector![-1.0, -1.0],
        ];
        let t = Template::from_normalized(&pts, &cfg).unwrap();
        assert!(t.start.is_none());
        assert_eq!(t.vector.len(), 10);
    }
}
