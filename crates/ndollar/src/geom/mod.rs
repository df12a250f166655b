//! Planar points, strokes and path utilities.
//!
//! - `types`: `Point`, `Stroke`, `StrokeSet`, `Bounds2`.
//! - `util`: path length, distance, centroid, bounding box, rotation about a center.
//!
//! Everything here is a pure function over `nalgebra::Vector2<f64>`; no state.

mod types;
mod util;

pub use types::{check_strokes, combine_strokes, Bounds2, Point, Stroke, StrokeSet};
pub use util::{bounds, centroid, distance, indicative_angle, path_length, rotate_about};
