use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Label of the phase segmentation stage in [`TimingBreakdown::stages`].
pub const SEGMENTATION: &str = "segmentation";
/// Label of the metric extraction stage in [`TimingBreakdown::stages`].
pub const METRICS: &str = "metrics";

/// Milliseconds spent in one swing stage (`"segmentation"` or `"metrics"`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Time spent analyzing one swing: segmentation then metrics, in run order,
/// plus the end-to-end total (which also covers trace assembly).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Time recorded under `label`, e.g. [`SEGMENTATION`].
    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swing_stages_are_looked_up_by_label() {
        let mut timings = TimingBreakdown::default();
        timings.push(SEGMENTATION, 1.5);
        timings.push(METRICS, 0.25);
        assert_eq!(timings.stage_ms(SEGMENTATION), Some(1.5));
        assert_eq!(timings.stage_ms(METRICS), Some(0.25));
        assert_eq!(timings.stage_ms("impact"), None);

        let json = serde_json::to_value(&timings).unwrap();
        assert_eq!(json["stages"][1]["label"], "metrics");
        assert_eq!(json["stages"][1]["elapsedMs"], 0.25);
    }
}
