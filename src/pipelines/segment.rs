/*! Segment processing.

A segment is processed start to finish by a single worker:
parse → extract → filter → fingerprint → deduplicate.
Workers share nothing mutable: they return a [SegmentOutcome] that the orchestrator joins.
!*/
use std::fmt;

use log::{debug, info, warn};

use super::extract::LineExtractor;
use crate::error::Error;
use crate::line::Line;
use crate::processing::dedup::{dedup_with, FingerprintFilter};
use crate::sources::{SegmentSource, Wet};

/// Lifecycle of a segment.
///
/// `Pending → Fetching → Parsing → Filtering → PartiallyWritten → Done`, or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentStatus {
    Pending,
    Fetching,
    Parsing,
    Filtering,
    /// lines have been handed to the partition writer but are not sealed yet.
    PartiallyWritten,
    Done,
    Failed(String),
}

impl fmt::Display for SegmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentStatus::Failed(reason) => write!(f, "failed ({})", reason),
            status => write!(f, "{:?}", status),
        }
    }
}

/// Result of a worker's processing of one segment.
#[derive(Debug)]
pub struct SegmentOutcome {
    pub segment: String,
    pub status: SegmentStatus,
    /// accepted, segment-deduplicated lines, in record order.
    /// Holds the lines extracted before the failure point for failed segments.
    pub lines: Vec<Line>,
    pub records: usize,
    pub skipped_records: usize,
}

impl SegmentOutcome {
    fn new(segment: &str) -> Self {
        Self {
            segment: segment.to_string(),
            status: SegmentStatus::Pending,
            lines: Vec::new(),
            records: 0,
            skipped_records: 0,
        }
    }

    fn enter(&mut self, status: SegmentStatus) {
        debug!("{}: {} -> {}", self.segment, self.status, status);
        self.status = status;
    }

    fn fail(mut self, error: Error) -> Self {
        warn!(
            "{}: {} ({} lines extracted before failure)",
            self.segment,
            error,
            self.lines.len()
        );
        self.enter(SegmentStatus::Failed(error.to_string()));
        self
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, SegmentStatus::Failed(_))
    }
}

/// Process one segment: open it through `source`, then extract and deduplicate its lines.
///
/// Never panics nor returns early with an error: failures are reported in the outcome.
pub fn process_segment(
    segment: &str,
    source: &dyn SegmentSource,
    extractor: &LineExtractor,
) -> SegmentOutcome {
    let mut outcome = SegmentOutcome::new(segment);
    info!("working on segment {}", segment);

    outcome.enter(SegmentStatus::Fetching);
    let reader = match source.open(segment) {
        Ok(reader) => reader,
        Err(e) => return outcome.fail(e),
    };

    outcome.enter(SegmentStatus::Parsing);
    let records = match Wet::from_reader(reader) {
        Ok(records) => records,
        Err(e) => return outcome.fail(Error::corrupt(segment, e)),
    };

    outcome.enter(SegmentStatus::Filtering);
    let mut seen = FingerprintFilter::new();
    for record in records {
        let record = match record {
            Ok(record) => record,
            Err(e) => return outcome.fail(Error::corrupt(segment, e)),
        };
        outcome.records += 1;

        match extractor.extract(&record) {
            Ok(lines) => outcome.lines.extend(dedup_with(lines, &mut seen)),
            Err(skip) => {
                debug!("{}: skipping {:?}: {:?}", segment, record.url, skip);
                outcome.skipped_records += 1;
            }
        }
    }

    info!(
        "segment {}: {} records ({} skipped), {} lines",
        segment,
        outcome.records,
        outcome.skipped_records,
        outcome.lines.len()
    );
    outcome
}
