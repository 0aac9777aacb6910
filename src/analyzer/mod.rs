//! Swing analyzer chaining segmentation and metrics extraction.
//!
//! Overview
//! - Segments the pose sequence into address, top of backswing and impact
//!   (see [`crate::segmentation`]).
//! - Extracts the eight swing metrics over the resulting frame spans
//!   (see [`crate::metrics`]).
//! - Optionally records a per-stage [`AnalysisTrace`](crate::diagnostics::AnalysisTrace)
//!   with timings and detection details.
//!
//! Both stages are pure functions of their input, so independent sequences
//! can be analysed concurrently; [`SwingAnalyzer::analyze_batch`] does so on
//! the rayon thread pool.
//!
//! Modules
//! - [`params`] – configuration types used by the analyzer and CLI.
//! - `pipeline` – the [`SwingAnalyzer`] implementation.

pub mod params;
mod pipeline;

pub use params::AnalyzerParams;
pub use pipeline::{SwingAnalysis, SwingAnalyzer};
