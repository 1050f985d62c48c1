//! Serializable summaries for tools: stage timings and traced segments.
pub mod timing;
pub mod trace;

pub use timing::{StageTiming, TimingBreakdown};
pub use trace::{SegmentTrace, TraceReport};
