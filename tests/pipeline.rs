mod common;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use common::*;
use geocrawl::io::{naming, read_shard, PartitionKey};
use geocrawl::pipelines::{Pipeline, PipelineConfig, RunSummary, SegmentOrchestrator};
use geocrawl::sources::LocalSource;

fn run(src: &Path, dst: &Path, segments: &[String], batch_size: usize) -> RunSummary {
    let mut config = PipelineConfig::new(dst);
    config.workers = 2;
    config.batch_size = batch_size;
    SegmentOrchestrator::new(segments.to_vec(), LocalSource::new(src), config)
        .run()
        .unwrap()
}

fn france() -> PartitionKey {
    PartitionKey::new("europe_west", "France", "und")
}

/// shard file name -> content, for the whole tree.
fn snapshot(dst: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    for key in naming::list_partitions(dst).unwrap() {
        for (_, path) in naming::list_shards(dst, &key).unwrap() {
            let content = std::fs::read(&path).unwrap();
            files.insert(path, content);
        }
    }
    files
}

#[test_log::test]
fn end_to_end() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    let segments = vec![
        write_segment(src.path(), "a", &gzip_members(&segment_a())),
        write_segment(src.path(), "b", &gzip_members(&segment_b())),
    ];

    let summary = run(src.path(), dst.path(), &segments, 2);
    assert_eq!(summary.done, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.total_rows(), 5);

    assert_eq!(
        naming::list_partitions(dst.path()).unwrap(),
        vec![
            PartitionKey::new("asia_east", "Japan", "und"),
            PartitionKey::new("europe_west", "France", "und"),
            PartitionKey::new("europe_west", "Germany", "und"),
        ]
    );

    let shards = naming::list_shards(dst.path(), &france()).unwrap();
    assert_eq!(shards.len(), 1);
    assert_eq!(shards[0].0.period, CRAWL);

    let lines = read_shard(&shards[0].1).unwrap();
    let rows: Vec<(&str, u64, &str)> = lines
        .iter()
        .map(|l| (l.url.as_str(), l.line_id, l.text.as_str()))
        .collect();
    // PROSE appears in both segments, the first occurrence is kept
    assert_eq!(
        rows,
        vec![
            ("http://www.example.fr/a", 1, PROSE),
            ("http://www.example.fr/a", 2, OTHER),
            ("http://other.fr/b", 1, NEWS),
        ]
    );
    assert!(lines.iter().all(|l| l.domain == "fr" && l.country == "France"));
}

#[test]
fn idempotent_rerun() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    let segments = vec![
        write_segment(src.path(), "a", &gzip_members(&segment_a())),
        write_segment(src.path(), "b", &gzip_members(&segment_b())),
    ];

    run(src.path(), dst.path(), &segments, 1);
    let first = snapshot(dst.path());
    assert!(!first.is_empty());

    let summary = run(src.path(), dst.path(), &segments, 1);
    assert_eq!(summary.done, 0);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.total_rows(), 0);
    assert_eq!(snapshot(dst.path()), first);
}

#[test]
fn truncated_segment_is_retried() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();

    let mut truncated = segment_a().concat();
    truncated.truncate(truncated.len() - 10);
    let segments = vec![
        write_segment(src.path(), "a", &truncated),
        write_segment(src.path(), "b", &gzip_members(&segment_b())),
    ];

    let summary = run(src.path(), dst.path(), &segments, 2);
    assert_eq!(summary.done, 1);
    assert_eq!(summary.failed, 1);

    // lines extracted before the truncation point are not written
    let texts: Vec<String> = naming::list_shards(dst.path(), &france())
        .unwrap()
        .into_iter()
        .flat_map(|(_, path)| read_shard(&path).unwrap())
        .map(|l| l.text)
        .collect();
    assert_eq!(texts, vec![NEWS.to_string(), PROSE.to_string()]);

    // the failed segment is attempted again, the done one is not
    let summary = run(src.path(), dst.path(), &segments, 2);
    assert_eq!(summary.done, 0);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 1);
}

#[test]
fn missing_segment_fails() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    let segments = vec![segment_id("missing")];

    let summary = run(src.path(), dst.path(), &segments, 1);
    assert_eq!(summary.failed, 1);
    assert!(naming::list_partitions(dst.path()).unwrap().is_empty());
}
