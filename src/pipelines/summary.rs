//! Run summary, reported at the end of every pipeline.
use std::collections::BTreeMap;
use std::fmt;

use crate::io::PartitionKey;
use crate::processing::consolidate::ConsolidateReport;

/// Counts of processed units (segments, shards or partitions) and rows written per partition.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub done: usize,
    pub failed: usize,
    pub skipped: usize,
    pub rows_per_partition: BTreeMap<PartitionKey, u64>,
}

impl RunSummary {
    pub fn total_rows(&self) -> u64 {
        self.rows_per_partition.values().sum()
    }

    /// Add `rows` sealed rows to `key`'s count.
    pub fn add_rows(&mut self, key: &PartitionKey, rows: u64) {
        *self.rows_per_partition.entry(key.clone()).or_insert(0) += rows;
    }
}

impl From<ConsolidateReport> for RunSummary {
    fn from(report: ConsolidateReport) -> Self {
        Self {
            done: report.consolidated,
            failed: 0,
            skipped: report.skipped,
            rows_per_partition: report.rows_written,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "done: {}, failed: {}, skipped: {}, rows written: {}",
            self.done,
            self.failed,
            self.skipped,
            self.total_rows()
        )?;
        for (key, rows) in &self.rows_per_partition {
            writeln!(f, "  {}: {}", key, rows)?;
        }
        Ok(())
    }
}
