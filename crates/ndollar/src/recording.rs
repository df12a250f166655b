//! Point capture buffer: the in-progress stroke plus committed strokes.
//!
//! The input adapter decides where strokes start and end; this buffer only
//! accumulates. Each `Recognizer` owns its own `Recording`. Nothing caps its
//! growth, so adapters call `reset` between gestures.

use crate::geom::{Point, Stroke, StrokeSet};

/// Whether points are currently accumulating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordingState {
    Idle,
    Drawing,
}

#[derive(Clone, Debug, Default)]
pub struct Recording {
    current: Vec<Point>,
    pending: StrokeSet,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `point`; `start_new_stroke` first drops any uncommitted points.
    pub fn record(&mut self, point: Point, start_new_stroke: bool) -> Point {
        if start_new_stroke {
            self.current.clear();
        }
        self.current.push(point);
        point
    }

    /// Commit the in-progress points (if any) as a stroke; returns all pending strokes.
    pub fn save(&mut self) -> &StrokeSet {
        if !self.current.is_empty() {
            let points = std::mem::take(&mut self.current);
            self.pending.push(Stroke::new(points));
        }
        &self.pending
    }

    /// Drop both the in-progress points and the pending strokes.
    pub fn reset(&mut self) {
        self.current.clear();
        self.pending.clear();
    }

    /// Hand over the pending strokes, leaving the buffer without any.
    pub fn take_pending(&mut self) -> StrokeSet {
        std::mem::take(&mut self.pending)
    }

    pub fn state(&self) -> RecordingState {
        if self.current.is_empty() {
            RecordingState::Idle
        } else {
            RecordingState::Drawing
        }
    }

    #[inline]
    pub fn current(&self) -> &[Point] {
        &self.current
    }

    #[inline]
    pub fn pending(&self) -> &[Stroke] {
        &self.pending
    }
}
