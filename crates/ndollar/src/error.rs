//! Error type shared by the whole engine.
//!
//! "No match" is not represented here: `Recognizer::recognize` returns
//! `Ok(None)` for that.

use std::fmt;

/// Errors surfaced by learn/recognize and the preprocessing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureError {
    /// A learn call without strokes (and nothing pending in the recording buffer).
    EmptyStrokes,
    /// A learn call with an empty gesture name.
    EmptyName,
    /// Stroke `index` has fewer than two points.
    ShortStroke { index: usize, len: usize },
    /// More strokes than `RecognizerCfg::max_strokes` allows.
    TooManyStrokes { count: usize, max: usize },
    /// All points of a path coincide (zero length or zero extent).
    DegeneratePath,
    /// A vector to normalize has zero magnitude.
    DegenerateVector,
    /// Configuration rejected by `RecognizerCfg::validate`.
    InvalidConfig { reason: String },
    /// Export of a gesture name that is not in the library.
    UnknownGesture { name: String },
    /// A stroke or library document could not be parsed.
    Parse { reason: String },
}

impl GestureError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Caller-correctable input problems (bad strokes, names, config, documents).
    pub fn is_input_error(&self) -> bool {
        !self.is_degenerate()
    }

    /// Pathological geometry: coincident points or a zero-magnitude vector.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegeneratePath | Self::DegenerateVector)
    }
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrokes => write!(f, "no strokes given and none recorded"),
            Self::EmptyName => write!(f, "gesture name must not be empty"),
            Self::ShortStroke { index, len } => write!(
                f,
                "stroke {index} has {len} point(s); at least 2 are required"
            ),
            Self::TooManyStrokes { count, max } => {
                write!(f, "gesture has {count} strokes; at most {max} are allowed")
            }
            Self::DegeneratePath => write!(f, "path is degenerate (all points coincide)"),
            Self::DegenerateVector => write!(f, "vector has zero magnitude"),
            Self::InvalidConfig { reason } => write!(f, "invalid recognizer config: {reason}"),
            Self::UnknownGesture { name } => write!(f, "no gesture named {name:?}"),
            Self::Parse { reason } => write!(f, "malformed strokes document: {reason}"),
        }
    }
}

impl std::error::Error for GestureError {}

impl From<serde_json::Error> for GestureError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse {
            reason: e.to_string(),
        }
    }
}
