//! Swing phase segmentation.
//!
//! Three independent scans over a [`PoseSequence`] locate the key frames of
//! a swing:
//! - **address**: the first run of consecutive frames where the torso
//!   (shoulders and hips) is still, see [`detect_address`];
//! - **backswing**: the frame with the largest mean wrist `y`, see
//!   [`detect_backswing`];
//! - **impact**: the first frame from the backswing onward whose hands return
//!   closest to their address position, see [`detect_impact`].
//!
//! Every key frame is an `Option<usize>`; nothing here ever indexes the
//! sequence with an unresolved frame. The phases are not guaranteed to be
//! ordered.

mod address;
mod backswing;
mod impact;
pub mod params;

#[cfg(test)]
mod tests;

pub use address::{detect_address, AddressDetection};
pub use backswing::{detect_backswing, BackswingDetection};
pub use impact::{detect_impact, ImpactDetection};
pub use params::SegmenterParams;

use crate::types::{PoseSequence, SwingSegments};
use serde::Serialize;

/// Per-phase detection details alongside the resolved segments.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationDetails {
    pub address: AddressDetection,
    pub backswing: BackswingDetection,
    pub impact: ImpactDetection,
}

impl SegmentationDetails {
    pub fn segments(&self) -> SwingSegments {
        SwingSegments {
            address: self.address.frame,
            backswing: self.backswing.frame,
            impact: self.impact.frame,
        }
    }
}

/// Stateless segmenter; holds only its thresholds.
#[derive(Clone, Debug, Default)]
pub struct PhaseSegmenter {
    params: SegmenterParams,
}

impl PhaseSegmenter {
    pub fn new(params: SegmenterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SegmenterParams {
        &self.params
    }

    pub fn segment(&self, sequence: &PoseSequence) -> SwingSegments {
        self.segment_detailed(sequence).segments()
    }

    pub fn segment_detailed(&self, sequence: &PoseSequence) -> SegmentationDetails {
        let address = detect_address(sequence, &self.params);
        let backswing = detect_backswing(sequence);
        let impact = detect_impact(sequence, address.frame, backswing.frame);
        SegmentationDetails {
            address,
            backswing,
            impact,
        }
    }
}

/// Segments `sequence` with the default thresholds.
pub fn segment(sequence: &PoseSequence) -> SwingSegments {
    PhaseSegmenter::default().segment(sequence)
}
