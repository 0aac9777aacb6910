use super::params::SegmenterParams;
use crate::geometry::{pose_vector, PoseVector};
use crate::types::PoseSequence;
use serde::Serialize;

/// Outcome of the stability-window scan.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetection {
    #[serde(with = "crate::types::sentinel")]
    pub frame: Option<usize>,
    /// Frames with all four torso landmarks valid.
    pub pose_vectors: usize,
    /// Longest run of consecutive still frames anywhere in the sequence.
    pub longest_still_run: usize,
}

/// Locates the first frame of the first run of `stability_window` consecutive
/// frames whose torso pose vectors move less than `movement_threshold`
/// between neighbours.
///
/// A frame without a pose vector breaks the run; a frame that moved too much
/// starts a new run of length one.
///
/// The window counts frames, not movements: `stability_window` still frames
/// span only `stability_window - 1` sub-threshold movements, so a 3-frame
/// still clip resolves to address 0.
pub fn detect_address(sequence: &PoseSequence, params: &SegmenterParams) -> AddressDetection {
    let window = params.window();
    let mut out = AddressDetection::default();
    let mut run = 0usize;
    let mut prev: Option<PoseVector> = None;

    for (i, frame) in sequence.iter().enumerate() {
        let current = pose_vector(frame);
        run = match (&prev, &current) {
            (Some(p), Some(c)) if (c - p).norm() < params.movement_threshold => run + 1,
            (_, Some(_)) => 1,
            (_, None) => 0,
        };
        if current.is_some() {
            out.pose_vectors += 1;
        }
        out.longest_still_run = out.longest_still_run.max(run);
        if run >= window && out.frame.is_none() {
            out.frame = Some(i + 1 - window);
        }
        prev = current;
    }
    out
}
