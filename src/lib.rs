#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod diagnostics;
pub mod error;
pub mod metrics;
pub mod segmentation;
pub mod types;

// Supporting modules used by the CLI and by callers embedding the analyzer.
pub mod config;
pub mod geometry;
pub mod io;
pub mod prompt;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalyzerParams, SwingAnalysis, SwingAnalyzer};
pub use crate::error::SwingError;
pub use crate::metrics::{MetricName, Metrics, MetricsExtractor};
pub use crate::segmentation::{PhaseSegmenter, SegmenterParams};
pub use crate::types::{Frame, Landmark, LandmarkName, PoseSequence, SwingSegments, NOT_FOUND};

// Detailed report returned by the analyzer.
pub use crate::diagnostics::{AnalysisReport, AnalysisTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use swing_coach::prelude::*;
///
/// # fn main() -> Result<(), swing_coach::SwingError> {
/// let sequence = swing_coach::io::load_pose_sequence("pose.json".as_ref())?;
/// let analysis = SwingAnalyzer::default().analyze(&sequence);
/// println!("address={:?} impact={:?}", analysis.segments.address, analysis.segments.impact);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::types::{Frame, Landmark, LandmarkName, PoseSequence};
    pub use crate::{Metrics, SwingAnalyzer, SwingSegments};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::segmentation::{
        detect_address, detect_backswing, detect_impact, AddressDetection, BackswingDetection,
        ImpactDetection, SegmentationDetails,
    };

    pub use crate::metrics::{FrameSpan, MetricsDetails};

    pub use crate::diagnostics::{
        InputDescriptor, MetricsStage, SegmentationStage, StageTiming, TimingBreakdown,
    };
}
