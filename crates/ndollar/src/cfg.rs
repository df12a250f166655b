//! Recognizer tuning.
//!
//! One plain `Copy` struct per engine instance, so two recognizers in the same
//! process can run with different resample counts or gates.

use serde::{Deserialize, Serialize};

use crate::error::GestureError;
use crate::expand::template_count;

/// Tuning knobs for normalization, vectorization and gating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerCfg {
    /// Number of points every path is resampled to (N).
    pub resample_count: usize,
    /// Edge length of the square a path is scaled into.
    pub square_size: f64,
    /// Aspect ratio at or below which a path counts as one-dimensional
    /// and gets uniform scaling. Usually 0.20 – 0.35.
    pub one_d_threshold: f64,
    /// Index k of the point used for the start direction (point[0] → point[k]).
    pub start_index: usize,
    /// Maximum start-direction gap (radians) for a template to be scored.
    pub start_angle_threshold: f64,
    /// Largest stroke count accepted by learn; a gesture of M strokes
    /// expands to M!·2^M templates.
    pub max_strokes: usize,
}

impl Default for RecognizerCfg {
    fn default() -> Self {
        Self {
            resample_count: 96,
            square_size: 250.0,
            one_d_threshold: 0.25,
            start_index: 12,
            start_angle_threshold: std::f64::consts::FRAC_PI_6,
            max_strokes: 5,
        }
    }
}

impl RecognizerCfg {
    /// Reject combinations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), GestureError> {
        if self.resample_count < 2 {
            return Err(GestureError::invalid_config(
                "resample_count must be at least 2",
            ));
        }
        if self.start_index == 0 || self.start_index >= self.resample_count {
            return Err(GestureError::invalid_config(format!(
                "start_index must be in 1..{} (got {})",
                self.resample_count, self.start_index
            )));
        }
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(GestureError::invalid_config(
                "square_size must be finite and positive",
            ));
        }
        if !(self.one_d_threshold.is_finite() && self.one_d_threshold >= 0.0) {
            return Err(GestureError::invalid_config(
                "one_d_threshold must be finite and non-negative",
            ));
        }
        if !(self.start_angle_threshold.is_finite() && self.start_angle_threshold >= 0.0) {
            return Err(GestureError::invalid_config(
                "start_angle_threshold must be finite and non-negative",
            ));
        }
        if self.max_strokes == 0 || template_count(self.max_strokes).is_none() {
            return Err(GestureError::invalid_config(format!(
                "max_strokes must be at least 1 and keep M!*2^M within usize (got {})",
                self.max_strokes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let cfg = RecognizerCfg::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.resample_count, 96);
        assert_eq!(cfg.start_index, 12);
        assert!((cfg.start_angle_threshold - 30f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn start_index_must_fit_resample_count() {
        let cfg = RecognizerCfg {
            resample_count: 8,
            start_index: 8,
            ..RecognizerCfg::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(GestureError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn max_strokes_must_be_positive_and_bounded() {
        for max_strokes in [0usize, 64] {
            let cfg = RecognizerCfg {
                max_strokes,
                ..RecognizerCfg::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(GestureError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: RecognizerCfg = serde_json::from_str(r#"{"resample_count": 64}"#).unwrap();
        assert_eq!(cfg.resample_count, 64);
        assert_eq!(cfg.square_size, 250.0);
        assert_eq!(cfg.start_index, 12);
        assert_eq!(cfg.max_strokes, 5);
    }
}
