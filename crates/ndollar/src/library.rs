//! Named gestures and their expanded templates.
//!
//! A `Gesture` keeps the strokes it was learned from (for export and strict
//! stroke-count checks) next to the immutable template set expanded from them.
//! `GestureLibrary` maps case-sensitive names to gestures; inserting an
//! existing name replaces the old gesture but keeps its learn position, which
//! the recognizer uses to break exact distance ties (earlier learned wins).

use std::collections::BTreeMap;

use crate::cfg::RecognizerCfg;
use crate::error::GestureError;
use crate::expand::expand;
use crate::geom::{Stroke, StrokeSet};
use crate::vectorize::Template;

/// A learned gesture.
#[derive(Clone, Debug)]
pub struct Gesture {
    name: String,
    strokes: StrokeSet,
    templates: Vec<Template>,
    seq: u64,
}

impl Gesture {
    /// Validate and expand `strokes` into a gesture. Fails without side effects.
    pub fn learn(
        name: impl Into<String>,
        strokes: StrokeSet,
        cfg: &RecognizerCfg,
    ) -> Result<Self, GestureError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GestureError::EmptyName);
        }
        let templates = expand(&strokes, cfg)?;
        Ok(Self {
            name,
            strokes,
            templates,
            seq: 0,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strokes the gesture was learned from, in the order given.
    #[inline]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    #[inline]
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    #[inline]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Learn position inside the owning library (0 until inserted).
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Name → gesture map owned by one recognizer.
#[derive(Clone, Debug, Default)]
pub struct GestureLibrary {
    gestures: BTreeMap<String, Gesture>,
    next_seq: u64,
}

impl GestureLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `gesture`, returning the one it replaced.
    pub fn insert(&mut self, mut gesture: Gesture) -> Option<Gesture> {
        gesture.seq = match self.gestures.get(&gesture.name) {
            Some(old) => old.seq,
            None => {
                self.next_seq += 1;
                self.next_seq
            }
        };
        self.gestures.insert(gesture.name.clone(), gesture)
    }

    pub fn remove(&mut self, name: &str) -> Option<Gesture> {
        self.gestures.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Gesture> {
        self.gestures.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.gestures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.gestures.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gesture> {
        self.gestures.values()
    }

    /// Total number of templates across all gestures.
    pub fn template_count(&self) -> usize {
        self.gestures.values().map(|g| g.templates.len()).sum()
    }

    /// All gestures as a JSON object of name → strokes.
    pub fn to_json(&self) -> Result<String, GestureError> {
        let doc: BTreeMap<&str, &[Stroke]> = self
            .gestures
            .values()
            .map(|g| (g.name.as_str(), g.strokes.as_slice()))
            .collect();
        Ok(serde_json::to_string(&doc)?)
    }
}

/// Serialize strokes as a JSON array of strokes, each an array of `[x, y]`.
pub fn strokes_to_json(strokes: &[Stroke]) -> Result<String, GestureError> {
    Ok(serde_json::to_string(strokes)?)
}

/// Parse a JSON array of strokes.
pub fn strokes_from_json(json: &str) -> Result<StrokeSet, GestureError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a library document: a JSON object of name → strokes.
pub fn parse_templates(json: &str) -> Result<BTreeMap<String, StrokeSet>, GestureError> {
    Ok(serde_json::from_str(json)?)
}
