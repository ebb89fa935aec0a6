/*! Deduplication

Exact-content deduplication over line fingerprints.
The first occurrence of a fingerprint is kept, later ones are discarded.

Deduplication is layered:
- inside a segment, before its lines leave the worker,
- inside a scheduling batch, once all the batch's workers are joined,
- inside a partition when its shards are consolidated (see [super::consolidate]).

Every layer is idempotent: deduplicating already deduplicated lines is a no-op.
!*/
use std::collections::{HashMap, HashSet};

use crate::filtering::FilterMut;
use crate::line::Line;

/// Stateful fingerprint filter.
///
/// [FilterMut::detect_mut] returns `true` the first time a fingerprint is seen.
#[derive(Debug, Default)]
pub struct FingerprintFilter {
    seen: HashSet<u64>,
}

impl FingerprintFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// number of distinct fingerprints seen so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl FilterMut<u64> for FingerprintFilter {
    fn detect_mut(&mut self, fingerprint: u64) -> bool {
        self.seen.insert(fingerprint)
    }
}

/// Keep lines whose fingerprint has not been seen by `filter` yet, preserving order.
pub fn dedup_with(lines: Vec<Line>, filter: &mut FingerprintFilter) -> Vec<Line> {
    lines
        .into_iter()
        .filter(|line| filter.detect_mut(line.fingerprint))
        .collect()
}

/// Remove duplicate fingerprints from `lines`, keeping first occurrences.
pub fn dedup(lines: Vec<Line>) -> Vec<Line> {
    let mut filter = FingerprintFilter::new();
    dedup_with(lines, &mut filter)
}

/// URL-level deduplication across crawl periods.
///
/// Each `(period, lines)` group is one shard, in shard order.
/// A URL belongs to the period of the first shard it appears in: lines of that URL
/// from shards of another period are re-crawls of the same page and are dropped.
/// Shards of the owning period all keep their lines, as a page may straddle
/// a shard boundary.
pub fn dedup_urls(sources: Vec<(String, Vec<Line>)>) -> Vec<Line> {
    let mut owners: HashMap<String, String> = HashMap::new();
    let mut kept = Vec::new();

    for (period, lines) in sources {
        for line in lines {
            let owner = owners
                .entry(line.url.clone())
                .or_insert_with(|| period.clone());
            if *owner == period {
                kept.push(line);
            }
        }
    }

    kept
}
