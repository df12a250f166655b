//! Path normalization: resample, rotate to the indicative angle, scale, rotate
//! back, translate.
//!
//! Model
//! - Resample the path to exactly `resample_count` equidistant points.
//! - Rotate about the centroid C so that first point → C lies on the x axis,
//!   scale in that frame (uniformly when the path is effectively 1-D, per axis
//!   otherwise), then undo the rotation. The orientation survives; only the
//!   aspect ratio is normalized. The vectorizer buckets orientation afterwards.
//! - Scaling is applied about C, so subtracting C centers the result on the origin.
//!
//! Cross-refs: `vectorize::vectorize`, `RecognizerCfg::{resample_count, square_size}`.

use nalgebra::Vector2;

use crate::cfg::RecognizerCfg;
use crate::error::GestureError;
use crate::geom::{bounds, centroid, distance, indicative_angle, path_length, rotate_about, Point};

/// Resample `path` to exactly `n` points spaced evenly along its length.
///
/// Interpolated points are treated as inserted into the path, so the next
/// interval is measured from them. The first point is kept verbatim; when
/// rounding leaves the output short, the path's final point is appended.
pub fn resample(path: &[Point], n: usize) -> Result<Vec<Point>, GestureError> {
    let first = *path.first().ok_or(GestureError::DegeneratePath)?;
    let length = path_length(path);
    if !(length.is_finite() && length > 0.0) {
        return Err(GestureError::DegeneratePath);
    }
    let interval = length / (n.max(2) - 1) as f64;
    let mut out = Vec::with_capacity(n);
    out.push(first);

    let mut acc = 0.0;
    let mut prev = first;
    let mut i = 1;
    while i < path.len() && out.len() < n {
        let cur = path[i];
        let d = distance(prev, cur);
        if acc + d >= interval && d > 0.0 {
            let t = (interval - acc) / d;
            let q = prev + (cur - prev) * t;
            out.push(q);
            prev = q;
            acc = 0.0;
        } else {
            acc += d;
            prev = cur;
            i += 1;
        }
    }
    let last = path[path.len() - 1];
    while out.len() < n {
        out.push(last);
    }
    Ok(out)
}

/// Full normalization of a (combined) path into `cfg.resample_count` points.
pub fn normalize(path: &[Point], cfg: &RecognizerCfg) -> Result<Vec<Point>, GestureError> {
    let mut pts = resample(path, cfg.resample_count)?;

    let c = centroid(&pts);
    let theta = indicative_angle(pts[0], c);
    rotate_about(&mut pts, c, -theta);

    let b = bounds(&pts).ok_or(GestureError::DegeneratePath)?;
    let (w, h) = (b.width(), b.height());
    let longest = w.max(h);
    if !(longest.is_finite() && longest > 0.0) {
        return Err(GestureError::DegeneratePath);
    }
    let one_d = (w / h).min(h / w) <= cfg.one_d_threshold;
    let scale = if one_d {
        Vector2::repeat(cfg.square_size / longest)
    } else {
        Vector2::new(cfg.square_size / w, cfg.square_size / h)
    };
    for p in pts.iter_mut() {
        *p = c + (*p - c).component_mul(&scale);
    }

    let c_scaled = centroid(&pts);
    rotate_about(&mut pts, c_scaled, theta);

    for p in pts.iter_mut() {
        *p -= c;
    }
    Ok(pts)
}
