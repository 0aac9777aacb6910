use crate::geometry::mean_wrist_y;
use crate::types::PoseSequence;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackswingDetection {
    #[serde(with = "crate::types::sentinel")]
    pub frame: Option<usize>,
    /// Frames where both wrists were valid.
    pub wrist_frames: usize,
    pub mean_wrist_y: Option<f64>,
}

/// Picks the frame with the largest mean wrist `y` (the lowest hands on
/// screen, since `y` grows downward). Ties keep the earliest frame.
pub fn detect_backswing(sequence: &PoseSequence) -> BackswingDetection {
    let mut out = BackswingDetection::default();
    for (i, frame) in sequence.iter().enumerate() {
        let Some(y) = mean_wrist_y(frame) else {
            continue;
        };
        out.wrist_frames += 1;
        let better = match out.mean_wrist_y {
            Some(best) => y > best,
            None => !y.is_nan(),
        };
        if better {
            out.mean_wrist_y = Some(y);
            out.frame = Some(i);
        }
    }
    out
}
