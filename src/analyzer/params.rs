//! Parameter types configuring the analyzer stages.

use crate::segmentation::SegmenterParams;
use serde::{Deserialize, Serialize};

/// Analyzer-wide parameters.
///
/// Metrics extraction has no tunables; everything configurable lives in the
/// segmentation thresholds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    pub segmenter: SegmenterParams,
}
