/*! Shard consolidation.

Merges the many small shards written per scheduling batch into fewer, capped shards.

For each partition, every sealed shard is loaded in shard index order, then
- URL-level deduplication keeps a page's lines from the first crawl period it appears in,
- text-level deduplication keeps the first occurrence of each fingerprint.

Output shards are sealed before any input shard is deleted, so an interrupted
consolidation leaves duplicates behind, never holes. Those duplicates go away on the next run.
Language pass markers of deleted inputs are deleted with them.
!*/
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::io::{naming, read_shard, PartitionKey, PartitionWriter};
use crate::pipelines::langid;
use crate::processing::dedup::{dedup, dedup_urls};

/// Outcome of a consolidation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConsolidateReport {
    /// partitions that have been rewritten.
    pub consolidated: usize,
    /// partitions left untouched.
    pub skipped: usize,
    pub rows_in: u64,
    pub rows_written: BTreeMap<PartitionKey, u64>,
}

enum PartitionOutcome {
    Consolidated { rows_in: u64, rows_out: u64 },
    Skipped,
}

pub struct Consolidate {
    src: PathBuf,
    dst: Option<PathBuf>,
    cap: usize,
    period: Option<String>,
}

impl Consolidate {
    /// Consolidate shards under `src` in place: new shards get higher indices
    /// than the ones they replace.
    pub fn in_place(src: &Path, cap: usize) -> Self {
        Self {
            src: src.to_path_buf(),
            dst: None,
            cap,
            period: None,
        }
    }

    /// Consolidate shards from `src` into the `dst` tree.
    pub fn into_dst(src: &Path, dst: &Path, cap: usize) -> Self {
        Self {
            src: src.to_path_buf(),
            dst: Some(dst.to_path_buf()),
            cap,
            period: None,
        }
    }

    /// Period token of the output shards.
    /// Defaults to the one of the most recent input shard.
    pub fn with_period(mut self, period: Option<String>) -> Self {
        self.period = period;
        self
    }

    /// Consolidate every partition found under the source tree, using `n_threads` threads.
    pub fn run(&self, n_threads: usize) -> Result<ConsolidateReport, Error> {
        let keys = naming::list_partitions(&self.src)?;
        info!("{} partitions to consolidate", keys.len());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .map_err(|e| Error::Custom(e.to_string()))?;
        let outcomes: Vec<Result<PartitionOutcome, Error>> =
            pool.install(|| keys.par_iter().map(|key| self.partition(key)).collect());

        let mut report = ConsolidateReport::default();
        for (key, outcome) in keys.into_iter().zip(outcomes) {
            match outcome? {
                PartitionOutcome::Consolidated { rows_in, rows_out } => {
                    report.consolidated += 1;
                    report.rows_in += rows_in;
                    report.rows_written.insert(key, rows_out);
                }
                PartitionOutcome::Skipped => report.skipped += 1,
            }
        }

        Ok(report)
    }

    /// Consolidate the shards of one partition.
    fn partition(&self, key: &PartitionKey) -> Result<PartitionOutcome, Error> {
        let shards = naming::list_shards(&self.src, key)?;

        // a lone shard is already deduplicated
        if self.dst.is_none() && shards.len() < 2 {
            debug!("{}: nothing to consolidate", key);
            return Ok(PartitionOutcome::Skipped);
        }

        let period = match (&self.period, shards.last()) {
            (Some(period), _) => period.clone(),
            (None, Some((name, _))) => name.period.clone(),
            (None, None) => return Ok(PartitionOutcome::Skipped),
        };

        let mut sources = Vec::with_capacity(shards.len());
        for (name, path) in &shards {
            sources.push((name.period.clone(), read_shard(path)?));
        }
        let rows_in: u64 = sources.iter().map(|(_, lines)| lines.len() as u64).sum();
        let lines = dedup(dedup_urls(sources));

        let root = self.dst.as_deref().unwrap_or(&self.src);
        let mut wr = PartitionWriter::new(root, &period, self.cap);
        for line in lines {
            wr.append(key.clone(), line)?;
        }
        let sealed = wr.finalize_all()?;
        let rows_out = wr.rows_written().get(key).copied().unwrap_or(0);

        for (name, path) in &shards {
            std::fs::remove_file(path)?;
            langid::clear_markers(&self.src, name)?;
        }

        info!(
            "{}: {} shards ({} rows) consolidated into {} shards ({} rows)",
            key,
            shards.len(),
            rows_in,
            sealed.len(),
            rows_out
        );
        Ok(PartitionOutcome::Consolidated { rows_in, rows_out })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoTable;
    use crate::line::Line;

    fn line(url: &str, line_id: u64, text: &str) -> Line {
        let table = GeoTable::default();
        Line::new(table.lookup("fr").unwrap(), url, line_id, text.to_string())
    }

    fn key() -> PartitionKey {
        PartitionKey::new("europe_west", "France", "und")
    }

    fn write(root: &Path, period: &str, lines: Vec<Line>) {
        let mut wr = PartitionWriter::new(root, period, 100);
        for line in lines {
            wr.append(key(), line).unwrap();
        }
        wr.finalize_all().unwrap();
    }

    fn all_lines(root: &Path) -> Vec<Line> {
        naming::list_shards(root, &key())
            .unwrap()
            .into_iter()
            .flat_map(|(_, path)| read_shard(&path).unwrap())
            .collect()
    }

    fn setup(root: &Path) {
        write(
            root,
            "CC-MAIN-2022-33",
            vec![line("http://a.fr/", 1, "a1"), line("http://a.fr/", 2, "shared")],
        );
        write(
            root,
            "CC-MAIN-2022-40",
            vec![
                line("http://a.fr/", 1, "a1 recrawled"),
                line("http://b.fr/", 1, "shared"),
                line("http://b.fr/", 2, "b2"),
            ],
        );
    }

    #[test]
    fn in_place() {
        let src = tempfile::tempdir().unwrap();
        setup(src.path());

        let report = Consolidate::in_place(src.path(), 2).run(2).unwrap();
        assert_eq!(report.consolidated, 1);
        assert_eq!(report.rows_in, 5);
        assert_eq!(report.rows_written.get(&key()), Some(&3));

        let shards = naming::list_shards(src.path(), &key()).unwrap();
        let indices: Vec<u64> = shards.iter().map(|(name, _)| name.index).collect();
        assert_eq!(indices, vec![2, 3]);
        assert!(shards.iter().all(|(name, _)| name.period == "CC-MAIN-2022-40"));

        let texts: Vec<String> = all_lines(src.path()).into_iter().map(|l| l.text).collect();
        assert_eq!(texts, vec!["a1", "shared", "b2"]);
    }

    #[test]
    fn idempotent() {
        let src = tempfile::tempdir().unwrap();
        setup(src.path());

        Consolidate::in_place(src.path(), 100).run(1).unwrap();
        let once = all_lines(src.path());
        let report = Consolidate::in_place(src.path(), 100).run(1).unwrap();
        assert_eq!(report.consolidated, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(all_lines(src.path()), once);
    }

    #[test]
    fn page_across_capped_shards() {
        let src = tempfile::tempdir().unwrap();
        let mut wr = PartitionWriter::new(src.path(), "local", 2);
        for line in [
            line("http://a.fr/", 1, "a1"),
            line("http://a.fr/", 2, "a2"),
            line("http://a.fr/", 3, "a3"),
            line("http://b.fr/", 1, "b1"),
        ] {
            wr.append(key(), line).unwrap();
        }
        wr.finalize_all().unwrap();
        assert_eq!(naming::list_shards(src.path(), &key()).unwrap().len(), 2);

        for _ in 0..2 {
            let report = Consolidate::in_place(src.path(), 2).run(1).unwrap();
            assert_eq!(report.consolidated, 1);
            let texts: Vec<String> = all_lines(src.path()).into_iter().map(|l| l.text).collect();
            assert_eq!(texts, vec!["a1", "a2", "a3", "b1"]);
        }
    }

    #[test]
    fn into_dst() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        setup(src.path());

        let report = Consolidate::into_dst(src.path(), dst.path(), 100)
            .with_period(Some("final".to_string()))
            .run(1)
            .unwrap();
        assert_eq!(report.consolidated, 1);
        assert!(naming::list_partitions(src.path()).unwrap().is_empty());

        let shards = naming::list_shards(dst.path(), &key()).unwrap();
        assert_eq!(shards.len(), 1);
        assert_eq!(shards[0].0.period, "final");
        assert_eq!(all_lines(dst.path()).len(), 3);
    }
}
