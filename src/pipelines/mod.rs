//! Pipelines.
//!
//! - [SegmentOrchestrator] extracts lines from segments into `und` partitions,
//! - [LangId] moves lines from `und` partitions into per-language ones.
//!
//! Both implement the light [pipeline::Pipeline] trait and report a [RunSummary].
pub mod extract;
pub mod langid;
pub mod orchestrator;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod segment;
pub mod summary;

pub use extract::{Exclusions, LineExtractor};
pub use langid::LangId;
pub use orchestrator::{PipelineConfig, SegmentOrchestrator};
pub use pipeline::Pipeline;
pub use segment::{SegmentOutcome, SegmentStatus};
pub use summary::RunSummary;
