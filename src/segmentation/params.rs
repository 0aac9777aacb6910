//! Tunables for swing phase segmentation.

use serde::{Deserialize, Serialize};

/// Thresholds used by the address (stability window) heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterParams {
    /// Maximum L2 torso displacement between consecutive frames that still
    /// counts as "still" (normalized image units, strict `<`).
    pub movement_threshold: f64,
    /// Number of consecutive still frames required to declare the address.
    /// Values below 1 are treated as 1.
    pub stability_window: usize,
}

impl Default for SegmenterParams {
    fn default() -> Self {
        Self {
            movement_threshold: 0.003,
            stability_window: 3,
        }
    }
}

impl SegmenterParams {
    pub(crate) fn window(&self) -> usize {
        self.stability_window.max(1)
    }
}
