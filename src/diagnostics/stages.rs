use crate::metrics::{FrameSpan, MetricName, MetricsDetails};
use crate::segmentation::{
    AddressDetection, BackswingDetection, ImpactDetection, SegmentationDetails,
};
use serde::Serialize;

/// Segmentation stage report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationStage {
    pub movement_threshold: f64,
    pub stability_window: usize,
    pub address: AddressDetection,
    pub backswing: BackswingDetection,
    pub impact: ImpactDetection,
    pub elapsed_ms: f64,
}

impl SegmentationStage {
    pub fn new(
        details: SegmentationDetails,
        movement_threshold: f64,
        stability_window: usize,
        elapsed_ms: f64,
    ) -> Self {
        let SegmentationDetails {
            address,
            backswing,
            impact,
        } = details;
        Self {
            movement_threshold,
            stability_window,
            address,
            backswing,
            impact,
            elapsed_ms,
        }
    }

    /// True when the phases came out in swing order.
    pub fn ordered(&self) -> bool {
        match (self.address.frame, self.backswing.frame, self.impact.frame) {
            (Some(a), Some(b), Some(i)) => a <= b && b <= i,
            _ => false,
        }
    }
}

/// Metrics stage report.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsStage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backswing_span: Option<FrameSpan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swing_span: Option<FrameSpan>,
    pub nose_samples: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sanitized: Vec<MetricName>,
    pub elapsed_ms: f64,
}

impl MetricsStage {
    pub fn new(details: MetricsDetails, elapsed_ms: f64) -> Self {
        Self {
            backswing_span: details.backswing_span,
            swing_span: details.swing_span,
            nose_samples: details.nose_samples,
            sanitized: details.sanitized,
            elapsed_ms,
        }
    }
}
