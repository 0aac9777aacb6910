use crate::types::{Frame, PoseSequence};
use serde::Serialize;

/// Inclusive, bounds-checked range of frames `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FrameSpan {
    pub start: usize,
    pub end: usize,
}

impl FrameSpan {
    /// Span between two key frames of a sequence of `len` frames.
    ///
    /// `None` when either end is unresolved, out of bounds, or the ends are
    /// inverted.
    pub fn between(start: Option<usize>, end: Option<usize>, len: usize) -> Option<Self> {
        let (start, end) = (start?, end?);
        (start <= end && end < len).then_some(Self { start, end })
    }

    /// Number of frames covered, both ends included.
    pub fn frame_count(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn frames<'a>(&self, sequence: &'a PoseSequence) -> &'a [Frame] {
        sequence
            .frames()
            .get(self.start..=self.end)
            .unwrap_or_default()
    }
}
