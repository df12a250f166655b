//! Basic 2D types for captured input.
//!
//! - `Point`: an (x, y) position, `nalgebra::Vector2<f64>`.
//! - `Stroke`: one pen-down → pen-up point sequence; serializes as `[[x, y], ...]`.
//! - `StrokeSet`: the strokes of one gesture instance.
//! - `Bounds2`: axis-aligned bounding box.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::GestureError;

pub type Point = Vector2<f64>;

/// Strokes of one gesture instance. Order is kept but not meaningful for matching.
pub type StrokeSet = Vec<Stroke>;

/// One continuous contact, points in temporal order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build from `(x, y)` pairs.
    pub fn from_xy(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Same points, opposite drawing direction.
    pub fn reversed(&self) -> Stroke {
        Stroke {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl From<Vec<[f64; 2]>> for Stroke {
    fn from(pairs: Vec<[f64; 2]>) -> Self {
        Self {
            points: pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect(),
        }
    }
}

impl From<Stroke> for Vec<[f64; 2]> {
    fn from(s: Stroke) -> Self {
        s.points.into_iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Require a non-empty set whose strokes all have at least two points.
pub fn check_strokes(strokes: &[Stroke]) -> Result<(), GestureError> {
    if strokes.is_empty() {
        return Err(GestureError::EmptyStrokes);
    }
    for (index, s) in strokes.iter().enumerate() {
        if s.len() < 2 {
            return Err(GestureError::ShortStroke {
                index,
                len: s.len(),
            });
        }
    }
    Ok(())
}

/// Concatenate strokes in the given order into one path.
pub fn combine_strokes(strokes: &[Stroke]) -> Vec<Point> {
    let total = strokes.iter().map(Stroke::len).sum();
    let mut path = Vec::with_capacity(total);
    for s in strokes {
        path.extend_from_slice(s.points());
    }
    path
}
