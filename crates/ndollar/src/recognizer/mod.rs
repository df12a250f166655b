//! Recognizer: gesture library + recording buffer + tuning, behind plain calls.
//!
//! Purpose
//! - `learn` expands strokes into templates and stores them under a name.
//! - `recognize` normalizes the candidate once, gates every template by start
//!   direction and keeps the global minimum optimal-angle distance.
//! - `record`/`save`/`reset` buffer input points when no explicit strokes are given.
//!
//! Result policy
//! - "Nothing matched" is `Ok(None)`: empty library, empty candidate, every
//!   gesture filtered out, or every template gated away.
//! - Score is `1 / distance`; a zero distance scores `f64::MAX`.
//! - Exact distance ties go to the template drawn as learned (identity stroke
//!   order, no reversals) over a reordered or reversed variant, then to the
//!   gesture learned first.
//! - A start direction that cannot be computed (point k back on point 0)
//!   fails the gate instead of failing the call.
//!
//! Concurrency
//! - All state is owned and mutated through `&mut self`; share an instance
//!   across threads behind a lock.

use serde::Serialize;
use tracing::{debug, trace};

use crate::cfg::RecognizerCfg;
use crate::error::GestureError;
use crate::geom::{check_strokes, combine_strokes, Point, Stroke, StrokeSet};
use crate::library::{strokes_to_json, Gesture, GestureLibrary};
use crate::matcher::{optimal_distance, start_angle};
use crate::normalize::normalize;
use crate::recording::Recording;
use crate::vectorize::Template;

/// Search restrictions for one `recognize` call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    /// Only consider gestures learned from as many strokes as the candidate has.
    pub strict: bool,
    /// Only consider these names; `None` means all. Unknown names match nothing.
    pub names: Option<Vec<String>>,
}

impl Query {
    /// No restrictions.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn among<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn named(self, name: impl Into<String>) -> Self {
        self.among([name.into()])
    }

    fn admits(&self, gesture: &Gesture, stroke_count: usize) -> bool {
        if self.strict && gesture.stroke_count() != stroke_count {
            return false;
        }
        self.names
            .as_ref()
            .map_or(true, |names| names.iter().any(|n| n == gesture.name()))
    }
}

/// Best match of a recognition call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recognition {
    pub name: String,
    /// Reciprocal of `distance`; grows without bound as the match tightens.
    pub score: f64,
    /// Optimal-angle distance to the closest template, in radians.
    pub distance: f64,
    /// Stroke count of the matched gesture as learned.
    pub strokes: usize,
}

/// Reciprocal distance, with `f64::MAX` standing in for an exact match.
pub fn score_from_distance(distance: f64) -> f64 {
    let score = 1.0 / distance;
    if distance > 0.0 && score.is_finite() {
        score
    } else {
        f64::MAX
    }
}

/// Search `library` for the template closest to `strokes`.
pub fn search(
    library: &GestureLibrary,
    cfg: &RecognizerCfg,
    query: &Query,
    strokes: &[Stroke],
) -> Result<Option<Recognition>, GestureError> {
    if strokes.is_empty() || library.is_empty() {
        return Ok(None);
    }
    check_strokes(strokes)?;
    let path = combine_strokes(strokes);
    let probe = Template::from_normalized(&normalize(&path, cfg)?, cfg)?;

    // (gesture, distance, variant index); lower index is the stroke order and
    // direction as learned.
    let mut best: Option<(&Gesture, f64, usize)> = None;
    let (mut scored, mut gated) = (0usize, 0usize);
    for gesture in library.iter().filter(|g| query.admits(g, strokes.len())) {
        for (variant, template) in gesture.templates().iter().enumerate() {
            let passes = match (&probe.start, &template.start) {
                (Some(a), Some(b)) => start_angle(a, b) <= cfg.start_angle_threshold,
                _ => false,
            };
            if !passes {
                gated += 1;
                continue;
            }
            scored += 1;
            let d = optimal_distance(&template.vector, &probe.vector);
            let better = match best {
                None => true,
                Some((g, b, v)) => (d, variant, gesture.seq()) < (b, v, g.seq()),
            };
            if better {
                best = Some((gesture, d, variant));
            }
        }
    }
    trace!(scored, gated, "templates considered");

    let result = best.map(|(g, d, _)| Recognition {
        name: g.name().to_string(),
        score: score_from_distance(d),
        distance: d,
        strokes: g.stroke_count(),
    });
    match &result {
        Some(r) => debug!(name = %r.name, distance = r.distance, score = r.score, "recognized"),
        None => debug!(scored, gated, "no match"),
    }
    Ok(result)
}

/// One recognizer instance: its own library, recording buffer and tuning.
#[derive(Clone, Debug, Default)]
pub struct Recognizer {
    cfg: RecognizerCfg,
    library: GestureLibrary,
    recording: Recording,
}

impl Recognizer {
    pub fn new(cfg: RecognizerCfg) -> Result<Self, GestureError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            library: GestureLibrary::new(),
            recording: Recording::new(),
        })
    }

    /// New recognizer with every `(name, strokes)` entry learned in order.
    pub fn from_templates<I, S>(cfg: RecognizerCfg, templates: I) -> Result<Self, GestureError>
    where
        I: IntoIterator<Item = (S, StrokeSet)>,
        S: Into<String>,
    {
        let mut rec = Self::new(cfg)?;
        for (name, strokes) in templates {
            let name: String = name.into();
            rec.learn(&name, Some(strokes))?;
        }
        Ok(rec)
    }

    #[inline]
    pub fn cfg(&self) -> &RecognizerCfg {
        &self.cfg
    }

    #[inline]
    pub fn library(&self) -> &GestureLibrary {
        &self.library
    }

    #[inline]
    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    /// Learn `name` from `strokes`, or from the recording buffer when `None`.
    ///
    /// Buffer strokes are consumed only on success; on error neither the
    /// library nor the buffer changes. Returns the strokes stored.
    pub fn learn(
        &mut self,
        name: &str,
        strokes: Option<StrokeSet>,
    ) -> Result<StrokeSet, GestureError> {
        let from_buffer = strokes.is_none();
        let strokes = match strokes {
            Some(s) => s,
            None => self.recording.save().clone(),
        };
        let gesture = Gesture::learn(name, strokes, &self.cfg)?;
        if from_buffer {
            self.recording.take_pending();
        }
        let committed = gesture.strokes().to_vec();
        debug!(
            name,
            strokes = gesture.stroke_count(),
            templates = gesture.templates().len(),
            "learned gesture"
        );
        self.library.insert(gesture);
        Ok(committed)
    }

    /// Recognize `strokes`, or the recording buffer (after `save`) when `None`.
    pub fn recognize(
        &mut self,
        query: &Query,
        strokes: Option<&[Stroke]>,
    ) -> Result<Option<Recognition>, GestureError> {
        let strokes: &[Stroke] = match strokes {
            Some(s) => s,
            None => self.recording.save(),
        };
        search(&self.library, &self.cfg, query, strokes)
    }

    /// Recognize explicit strokes without touching the recording buffer.
    pub fn recognize_strokes(
        &self,
        query: &Query,
        strokes: &[Stroke],
    ) -> Result<Option<Recognition>, GestureError> {
        search(&self.library, &self.cfg, query, strokes)
    }

    pub fn forget(&mut self, name: &str) -> Option<Gesture> {
        let removed = self.library.remove(name);
        if removed.is_some() {
            debug!(name, "forgot gesture");
        }
        removed
    }

    pub fn record(&mut self, point: Point, start_new_stroke: bool) -> Point {
        self.recording.record(point, start_new_stroke)
    }

    pub fn save(&mut self) -> &StrokeSet {
        self.recording.save()
    }

    pub fn reset(&mut self) {
        self.recording.reset();
    }

    /// JSON strokes of gesture `name`, or of the pending recorded strokes when `None`.
    pub fn export(&self, name: Option<&str>) -> Result<String, GestureError> {
        match name {
            Some(name) => {
                let g = self
                    .library
                    .get(name)
                    .ok_or_else(|| GestureError::UnknownGesture {
                        name: name.to_string(),
                    })?;
                strokes_to_json(g.strokes())
            }
            None => strokes_to_json(self.recording.pending()),
        }
    }

    /// The whole library as a JSON object of name → strokes.
    pub fn export_library(&self) -> Result<String, GestureError> {
        self.library.to_json()
    }
}
