//! Multistroke gesture recognition ($N family, Protractor matching).
//!
//! Purpose
//! - Learn named gestures from a handful of exemplar strokes and recognize new
//!   captures against them, tolerant to translation, scale and small rotations.
//! - No trained model: every exemplar is expanded into unistroke templates at
//!   learn time and matching is a closed-form angular distance.
//!
//! Pipeline
//! - `geom`: points, strokes and the small path utilities everything else uses.
//! - `normalize`: resample to N points, rotation/scale/translation normalization.
//! - `vectorize`: bucketed canonical vector and start direction of a normalized path.
//! - `matcher`: optimal-angle distance and the start-direction gate angle.
//! - `expand`: stroke order × direction expansion into templates.
//! - `library`, `recording`, `recognizer`: the stateful engine surface.
//!
//! Cross-refs: `Recognizer` is the entry point; `RecognizerCfg` holds the tuning.

pub mod cfg;
pub mod error;
pub mod expand;
pub mod geom;
pub mod library;
pub mod matcher;
pub mod normalize;
pub mod recognizer;
pub mod recording;
pub mod synth;
pub mod vectorize;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::RecognizerCfg;
pub use error::GestureError;
pub use geom::{Point, Stroke, StrokeSet};
pub use library::{parse_templates, Gesture, GestureLibrary};
pub use nalgebra::Vector2 as Vec2;
pub use recognizer::{Query, Recognition, Recognizer};
pub use recording::{Recording, RecordingState};
pub use vectorize::{CanonicalVector, StartDirection, Template};

/// Common exports for adapters that only feed points and read results.
pub mod prelude {
    pub use crate::geom::{Point, Stroke, StrokeSet};
    pub use crate::{GestureError, Query, Recognition, Recognizer, RecognizerCfg};
}
