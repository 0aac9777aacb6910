//! Biomechanical swing metrics over the segmented phases.
//!
//! Two frame spans drive every metric:
//! - the *backswing span* `[address, backswing]` for the mean shoulder and hip
//!   rotation during the takeaway;
//! - the *swing span* `[address, impact]` for rotation ranges, spine tilt and
//!   head movement.
//!
//! A span with an unresolved or out-of-range end, or with inverted ends, is
//! empty and yields 0.0 for every metric computed over it. Frames with
//! invalid landmarks contribute a 0.0 angle sample rather than being skipped;
//! head movement only uses frames where the nose is valid.

mod names;
mod span;


pub use names::{MetricName, Metrics};
pub use span::FrameSpan;

use crate::geometry::{mean, peak_to_peak, rotation_deg, spine_tilt_deg};
use crate::types::{Frame, LandmarkName, PoseSequence, SwingSegments};
use log::warn;
use serde::Serialize;

/// Bookkeeping gathered while extracting metrics.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDetails {
    pub backswing_span: Option<FrameSpan>,
    pub swing_span: Option<FrameSpan>,
    /// Frames in the swing span with a valid nose.
    pub nose_samples: usize,
    /// Metrics replaced by 0.0 because they came out non-finite.
    pub sanitized: Vec<MetricName>,
}

/// Stateless metrics extractor.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetricsExtractor;

impl MetricsExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, sequence: &PoseSequence, segments: &SwingSegments) -> Metrics {
        self.extract_detailed(sequence, segments).0
    }

    pub fn extract_detailed(
        &self,
        sequence: &PoseSequence,
        segments: &SwingSegments,
    ) -> (Metrics, MetricsDetails) {
        let n = sequence.len();
        let backswing_span = FrameSpan::between(segments.address, segments.backswing, n);
        let swing_span = FrameSpan::between(segments.address, segments.impact, n);
        let takeaway = span_frames(backswing_span, sequence);
        let swing = span_frames(swing_span, sequence);

        let shoulders = |f: &Frame| {
            rotation_deg(f, LandmarkName::LeftShoulder, LandmarkName::RightShoulder)
        };
        let hips = |f: &Frame| rotation_deg(f, LandmarkName::LeftHip, LandmarkName::RightHip);

        let tilts = samples(swing, spine_tilt_deg);
        let nose: Vec<_> = swing
            .iter()
            .filter_map(|f| f.point(LandmarkName::Nose))
            .collect();
        let head_delta = match (nose.first(), nose.last()) {
            (Some(first), Some(last)) => last - first,
            _ => nalgebra::Vector2::zeros(),
        };

        let mut metrics = Metrics {
            shoulder_rotation_range_deg_backswing: mean(&samples(takeaway, shoulders)),
            shoulder_rotation_range_deg: peak_to_peak(&samples(swing, shoulders)),
            hip_rotation_range_deg_backswing: mean(&samples(takeaway, hips)),
            hip_rotation_range_deg: peak_to_peak(&samples(swing, hips)),
            spine_tilt_mean_deg: mean(&tilts),
            spine_tilt_range_deg: peak_to_peak(&tilts),
            head_movement_x: head_delta.x,
            head_movement_y: head_delta.y,
        };

        let sanitized = metrics.sanitize();
        if !sanitized.is_empty() {
            warn!("metrics: non-finite values replaced by 0.0: {:?}", sanitized);
        }

        let details = MetricsDetails {
            backswing_span,
            swing_span,
            nose_samples: nose.len(),
            sanitized,
        };
        (metrics, details)
    }
}

/// Extracts metrics with a default extractor.
pub fn extract(sequence: &PoseSequence, segments: &SwingSegments) -> Metrics {
    MetricsExtractor.extract(sequence, segments)
}

fn span_frames(span: Option<FrameSpan>, sequence: &PoseSequence) -> &[Frame] {
    match span {
        Some(s) => s.frames(sequence),
        None => &[],
    }
}

fn samples(frames: &[Frame], f: impl Fn(&Frame) -> f64) -> Vec<f64> {
    frames.iter().map(f).collect()
}
