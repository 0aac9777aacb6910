//! Serializable diagnostics model returned by the analyzer.
//!
//! [`AnalysisReport`] is the main entry point: it bundles the resolved
//! [`SwingSegments`](crate::types::SwingSegments), the [`Metrics`](crate::metrics::Metrics)
//! and an [`AnalysisTrace`] describing what each stage saw.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{AnalysisReport, AnalysisTrace, InputDescriptor};
pub use stages::{MetricsStage, SegmentationStage};
pub use timing::{StageTiming, TimingBreakdown};
