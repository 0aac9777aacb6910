//! Analyzer pipeline driving segmentation and metrics end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use swing_coach::{PoseSequence, SwingAnalyzer};
//!
//! # fn example(sequence: PoseSequence) {
//! let analyzer = SwingAnalyzer::default();
//! let report = analyzer.analyze_with_diagnostics(&sequence);
//! println!("impact frame: {:?}", report.segments.impact);
//! println!("shoulder range: {:.2}", report.metrics.shoulder_rotation_range_deg);
//! # }
//! ```
use super::params::AnalyzerParams;
use crate::diagnostics::timing::{self, elapsed_ms};
use crate::diagnostics::{
    AnalysisReport, AnalysisTrace, InputDescriptor, MetricsStage, SegmentationStage,
    TimingBreakdown,
};
use crate::metrics::{Metrics, MetricsExtractor};
use crate::segmentation::PhaseSegmenter;
use crate::types::{PoseSequence, SwingSegments};
use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Compact analysis result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SwingAnalysis {
    pub segments: SwingSegments,
    pub metrics: Metrics,
}

/// Immutable analyzer; safe to share across threads.
#[derive(Clone, Debug, Default)]
pub struct SwingAnalyzer {
    params: AnalyzerParams,
    segmenter: PhaseSegmenter,
    extractor: MetricsExtractor,
}

impl SwingAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        let segmenter = PhaseSegmenter::new(params.segmenter.clone());
        Self {
            params,
            segmenter,
            extractor: MetricsExtractor::new(),
        }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Segment and extract metrics, returning only the compact result.
    pub fn analyze(&self, sequence: &PoseSequence) -> SwingAnalysis {
        let segments = self.segmenter.segment(sequence);
        let metrics = self.extractor.extract(sequence, &segments);
        SwingAnalysis { segments, metrics }
    }

    /// Run the analysis and return both the result and a detailed report.
    pub fn analyze_with_diagnostics(&self, sequence: &PoseSequence) -> AnalysisReport {
        debug!(
            "SwingAnalyzer::analyze start frames={} threshold={} window={}",
            sequence.len(),
            self.params.segmenter.movement_threshold,
            self.params.segmenter.stability_window
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let seg_start = Instant::now();
        let details = self.segmenter.segment_detailed(sequence);
        let segments = details.segments();
        let seg_ms = elapsed_ms(seg_start);
        timings.push(timing::SEGMENTATION, seg_ms);
        debug!(
            "SwingAnalyzer::segmentation address={:?} backswing={:?} impact={:?} elapsed_ms={:.3}",
            segments.address, segments.backswing, segments.impact, seg_ms
        );
        if segments.address.is_none() && !sequence.is_empty() {
            warn!(
                "SwingAnalyzer: no still address window in {} frames (longest run {})",
                sequence.len(),
                details.address.longest_still_run
            );
        }

        let metrics_start = Instant::now();
        let (metrics, metrics_details) = self.extractor.extract_detailed(sequence, &segments);
        let metrics_ms = elapsed_ms(metrics_start);
        timings.push(timing::METRICS, metrics_ms);
        debug!(
            "SwingAnalyzer::metrics swing_span={:?} nose_samples={} elapsed_ms={:.3}",
            metrics_details.swing_span, metrics_details.nose_samples, metrics_ms
        );

        timings.total_ms = elapsed_ms(total_start);

        let input = InputDescriptor {
            frames: sequence.len(),
            frames_with_pose: sequence
                .iter()
                .filter(|f| f.landmarks.values().any(|l| l.is_valid()))
                .count(),
        };
        let segmentation = SegmentationStage::new(
            details,
            self.params.segmenter.movement_threshold,
            self.params.segmenter.stability_window,
            seg_ms,
        );

        AnalysisReport {
            segments,
            metrics,
            trace: AnalysisTrace {
                input,
                timings,
                segmentation,
                metrics: MetricsStage::new(metrics_details, metrics_ms),
            },
        }
    }

    /// Analyse independent sequences in parallel, preserving input order.
    pub fn analyze_batch(&self, sequences: &[PoseSequence]) -> Vec<AnalysisReport> {
        sequences
            .par_iter()
            .map(|seq| self.analyze_with_diagnostics(seq))
            .collect()
    }
}
