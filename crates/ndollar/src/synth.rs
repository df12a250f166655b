//! Reproducible perturbations of stroke sets (rotation, scale, shift, jitter).
//!
//! Purpose
//! - Produce "same gesture, different hand" samples for tests, benchmarks and
//!   training-set augmentation without shipping recorded data.
//!
//! Model
//! - Rotate by a uniform angle in ±`max_rotation` and scale by a uniform factor
//!   in `[scale_min, scale_max]`, both about the centroid of all points; shift
//!   by up to ±`max_shift` per axis; add per-point jitter of up to ±`jitter`
//!   (in the units of the input, scaled along with it).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::{Rotation2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{centroid, combine_strokes, Point, Stroke, StrokeSet};

/// Perturbation amplitudes.
#[derive(Clone, Copy, Debug)]
pub struct PerturbCfg {
    /// Maximum absolute rotation (radians).
    pub max_rotation: f64,
    pub scale_min: f64,
    pub scale_max: f64,
    /// Maximum absolute shift per axis.
    pub max_shift: f64,
    /// Maximum absolute per-coordinate jitter, before scaling.
    pub jitter: f64,
}

impl Default for PerturbCfg {
    fn default() -> Self {
        Self {
            max_rotation: 10f64.to_radians(),
            scale_min: 0.5,
            scale_max: 2.0,
            max_shift: 200.0,
            jitter: 2.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn symmetric<R: Rng>(rng: &mut R, amp: f64) -> f64 {
    if amp > 0.0 {
        rng.gen_range(-amp..=amp)
    } else {
        0.0
    }
}

/// Perturbed copy of `strokes`; stroke count, order and point counts are kept.
pub fn perturb(strokes: &[Stroke], cfg: PerturbCfg, tok: ReplayToken) -> StrokeSet {
    let mut rng = tok.to_std_rng();
    let center = centroid(&combine_strokes(strokes));
    let rot = Rotation2::new(symmetric(&mut rng, cfg.max_rotation.abs()));
    let lo = cfg.scale_min.min(cfg.scale_max);
    let hi = cfg.scale_min.max(cfg.scale_max);
    let k = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
    let shift = Vector2::new(
        symmetric(&mut rng, cfg.max_shift.abs()),
        symmetric(&mut rng, cfg.max_shift.abs()),
    );
    let jitter = cfg.jitter.abs();

    strokes
        .iter()
        .map(|s| {
            let points: Vec<Point> = s
                .points()
                .iter()
                .map(|p| {
                    let noise = Vector2::new(
                        symmetric(&mut rng, jitter),
                        symmetric(&mut rng, jitter),
                    );
                    center + (rot * (p - center) + noise) * k + shift
                })
                .collect();
            Stroke::new(points)
        })
        .collect()
}

/// Closed polygonal approximation of a circle, starting at angle 0, drawn CCW.
pub fn circle(center: Point, radius: f64, segments: usize) -> Stroke {
    let segments = segments.max(3);
    let points = (0..=segments)
        .map(|i| {
            let t = std::f64::consts::TAU * i as f64 / segments as f64;
            center + Vector2::new(t.cos(), t.sin()) * radius
        })
        .collect();
    Stroke::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn v_shape() -> StrokeSet {
        vec![Stroke::from_xy(&[(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)])]
    }

    #[test]
    fn same_token_same_sample() {
        let tok = ReplayToken { seed: 7, index: 3 };
        let a = perturb(&v_shape(), PerturbCfg::default(), tok);
        let b = perturb(&v_shape(), PerturbCfg::default(), tok);
        assert_eq!(a, b);
        let c = perturb(&v_shape(), PerturbCfg::default(), ReplayToken { seed: 7, index: 4 });
        assert_ne!(a, c);
    }

    #[test]
    fn zero_amplitudes_are_identity() {
        let cfg = PerturbCfg {
            max_rotation: 0.0,
            scale_min: 1.0,
            scale_max: 1.0,
            max_shift: 0.0,
            jitter: 0.0,
        };
        let out = perturb(&v_shape(), cfg, ReplayToken { seed: 1, index: 0 });
        for (p, q) in out[0].points().iter().zip(v_shape()[0].points()) {
            assert!((p - q).norm() < 1e-9);
        }
    }

    #[test]
    fn pure_shift_moves_every_point_equally() {
        let cfg = PerturbCfg {
            max_rotation: 0.0,
            scale_min: 1.0,
            scale_max: 1.0,
            max_shift: 50.0,
            jitter: 0.0,
        };
        let out = perturb(&v_shape(), cfg, ReplayToken { seed: 2, index: 9 });
        let d0 = out[0].points()[0] - v_shape()[0].points()[0];
        let d2 = out[0].points()[2] - v_shape()[0].points()[2];
        assert!((d0 - d2).norm() < 1e-9);
        assert!(d0.x.abs() <= 50.0 && d0.y.abs() <= 50.0);
    }

    #[test]
    fn circle_is_closed() {
        let c = circle(vector![10.0, 10.0], 5.0, 16);
        assert_eq!(c.len(), 17);
        assert!((c.points()[0] - c.points()[16]).norm() < 1e-9);
        assert!((c.points()[4] - vector![10.0, 15.0]).norm() < 1e-9);
    }
}
