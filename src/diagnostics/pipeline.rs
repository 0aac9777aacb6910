use super::{MetricsStage, SegmentationStage, TimingBreakdown};
use crate::metrics::Metrics;
use crate::types::SwingSegments;
use serde::Serialize;

/// Result produced by [`SwingAnalyzer::analyze_with_diagnostics`](crate::SwingAnalyzer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub segments: SwingSegments,
    pub metrics: Metrics,
    pub trace: AnalysisTrace,
}

/// What each stage of the analysis observed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub segmentation: SegmentationStage,
    pub metrics: MetricsStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub frames: usize,
    /// Frames in which at least one landmark was valid.
    pub frames_with_pose: usize,
}
