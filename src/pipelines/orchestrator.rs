/*! Segment orchestrator.

Drives the extraction pipeline over a list of segments.

# Processing
1. Segments that already have a done marker are skipped before anything is scheduled.
1. Remaining segments are processed in batches. Each batch gets a fresh worker pool,
   whose workers run [process_segment] on one segment each.
1. Worker results are joined in submission order, then deduplicated across the batch.
1. Lines of successful segments are appended to the [PartitionWriter], lines of failed ones are discarded.
1. Partitions are finalized, and only then are done markers written for the batch's successful segments.

A segment is thus marked done only once its lines are durably written, and a failed
segment is retried by the next run.
!*/
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{debug, info, warn};
use rayon::prelude::*;
use regex::Regex;

use super::extract::{Exclusions, LineExtractor};
use super::segment::{process_segment, SegmentOutcome, SegmentStatus};
use super::summary::RunSummary;
use super::Pipeline;
use crate::error::Error;
use crate::filtering::LineFilter;
use crate::geo::GeoTable;
use crate::io::{PartitionKey, PartitionWriter, DEFAULT_SHARD_CAP};
use crate::processing::dedup::{dedup_with, FingerprintFilter};
use crate::sources::SegmentSource;

lazy_static! {
    static ref CRAWL_ID: Regex = Regex::new(r"CC-MAIN-\d{4}-\d{2}").unwrap();
}

/// Period token used when none can be derived from segment identifiers.
pub const LOCAL_PERIOD: &str = "local";

const DONE_DIR: &str = ".done";

/// Crawl identifier (`CC-MAIN-2022-40`) of the first segment that holds one.
pub fn detect_period<S: AsRef<str>>(segments: &[S]) -> Option<String> {
    segments.iter().find_map(|segment| {
        segment
            .as_ref()
            .split('/')
            .find_map(|component| CRAWL_ID.find(component).map(|m| m.as_str().to_string()))
    })
}

/// Resumability markers, one empty file per done segment.
pub struct DoneMarkers {
    dir: PathBuf,
}

impl DoneMarkers {
    pub fn new(dst: &Path) -> Self {
        Self {
            dir: dst.join(DONE_DIR),
        }
    }

    pub fn path(&self, segment: &str) -> PathBuf {
        self.dir
            .join(format!("{}.done", segment.trim_start_matches('/').replace('/', ".")))
    }

    pub fn is_done(&self, segment: &str) -> bool {
        self.path(segment).is_file()
    }

    pub fn mark(&self, segment: &str) -> Result<(), Error> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(segment), b"")?;
        Ok(())
    }
}

pub struct PipelineConfig {
    pub dst: PathBuf,
    /// number of worker threads.
    pub workers: usize,
    /// number of segments per scheduling batch.
    pub batch_size: usize,
    pub shard_cap: usize,
    /// period token of output shards. Derived from segments if [None].
    pub period: Option<String>,
    pub exclusions: Exclusions,
    pub filter: LineFilter,
}

impl PipelineConfig {
    pub fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
            workers: rayon::current_num_threads(),
            batch_size: 16,
            shard_cap: DEFAULT_SHARD_CAP,
            period: None,
            exclusions: Exclusions::default(),
            filter: LineFilter::default(),
        }
    }
}

pub struct SegmentOrchestrator<S: SegmentSource> {
    segments: Vec<String>,
    source: S,
    config: PipelineConfig,
    geo: GeoTable,
}

impl<S: SegmentSource> SegmentOrchestrator<S> {
    pub fn new(segments: Vec<String>, source: S, config: PipelineConfig) -> Self {
        Self {
            segments,
            source,
            config,
            geo: GeoTable::default(),
        }
    }

    pub fn with_geo(mut self, geo: GeoTable) -> Self {
        self.geo = geo;
        self
    }

    fn period(&self) -> String {
        self.config
            .period
            .clone()
            .or_else(|| detect_period(&self.segments))
            .unwrap_or_else(|| LOCAL_PERIOD.to_string())
    }

    /// Segments left to process, in list order, without duplicates.
    fn pending(&self, markers: &DoneMarkers, summary: &mut RunSummary) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.segments
            .iter()
            .map(String::as_str)
            .filter(|segment| {
                if !seen.insert(*segment) {
                    debug!("{}: listed twice", segment);
                    return false;
                }
                if markers.is_done(segment) {
                    info!("{}: already done, skipping", segment);
                    summary.skipped += 1;
                    return false;
                }
                true
            })
            .collect()
    }

    /// Run workers over `batch`, returning outcomes in submission order.
    fn process_batch(
        &self,
        batch: &[&str],
        extractor: &LineExtractor,
    ) -> Result<Vec<SegmentOutcome>, Error> {
        // a fresh pool per batch recycles worker threads
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()
            .map_err(|e| Error::Custom(e.to_string()))?;

        Ok(pool.install(|| {
            batch
                .par_iter()
                .map(|segment| process_segment(segment, &self.source, extractor))
                .collect()
        }))
    }
}

impl<S: SegmentSource> Pipeline<RunSummary> for SegmentOrchestrator<S> {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<RunSummary, Error> {
        info!("geocrawl extraction pipeline v{}", Self::version());
        std::fs::create_dir_all(&self.config.dst)?;
        let period = self.period();
        info!("period token: {}", period);

        let markers = DoneMarkers::new(&self.config.dst);
        let mut summary = RunSummary::default();
        let pending = self.pending(&markers, &mut summary);
        info!(
            "{} segments to process ({} already done)",
            pending.len(),
            summary.skipped
        );

        let extractor =
            LineExtractor::new(&self.geo, &self.config.filter, &self.config.exclusions);
        let mut writer = PartitionWriter::new(&self.config.dst, &period, self.config.shard_cap);
        let batch_size = self.config.batch_size.max(1);
        let nb_batches = (pending.len() + batch_size - 1) / batch_size;

        for (batch_idx, batch) in pending.chunks(batch_size).enumerate() {
            info!("batch {}/{}: {} segments", batch_idx + 1, nb_batches, batch.len());
            let outcomes = self.process_batch(batch, &extractor)?;

            let mut seen = FingerprintFilter::new();
            let mut written = Vec::with_capacity(outcomes.len());
            for mut outcome in outcomes {
                if outcome.is_failed() {
                    warn!(
                        "{}: {}, discarding {} lines",
                        outcome.segment,
                        outcome.status,
                        outcome.lines.len()
                    );
                    summary.failed += 1;
                    continue;
                }

                for line in dedup_with(std::mem::take(&mut outcome.lines), &mut seen) {
                    let key = PartitionKey::unidentified(&line);
                    // a failed flush keeps its rows buffered, finalize_all retries it
                    if let Err(e) = writer.append(key, line) {
                        warn!("{}", e);
                    }
                }
                outcome.status = SegmentStatus::PartiallyWritten;
                written.push(outcome);
            }

            // write failures abort the run before any marker is written
            writer.finalize_all()?;

            for mut outcome in written {
                markers.mark(&outcome.segment)?;
                outcome.status = SegmentStatus::Done;
                info!("{}: {}", outcome.segment, outcome.status);
                summary.done += 1;
            }
        }

        summary.rows_per_partition = writer.rows_written().clone();
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods() {
        let segments = vec![
            "local/file.warc.wet.gz",
            "crawl-data/CC-MAIN-2022-40/segments/1664030331677.90/wet/CC-MAIN-20220924151538-20220924181538-00000.warc.wet.gz",
        ];
        assert_eq!(detect_period(&segments), Some("CC-MAIN-2022-40".to_string()));
        assert_eq!(detect_period(&["a/b.gz"]), None);
        assert_eq!(detect_period::<&str>(&[]), None);
    }

    #[test]
    fn markers() {
        let dst = tempfile::tempdir().unwrap();
        let markers = DoneMarkers::new(dst.path());
        let segment = "crawl-data/CC-MAIN-2022-40/segments/1/wet/a.warc.wet.gz";

        assert_eq!(
            markers.path(segment),
            dst.path()
                .join(".done/crawl-data.CC-MAIN-2022-40.segments.1.wet.a.warc.wet.gz.done")
        );
        assert!(!markers.is_done(segment));
        markers.mark(segment).unwrap();
        assert!(markers.is_done(segment));
        assert!(!markers.is_done("crawl-data/CC-MAIN-2022-40/segments/1/wet/b.warc.wet.gz"));
    }
}
