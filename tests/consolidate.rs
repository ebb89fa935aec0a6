mod common;

use std::path::Path;

use common::*;
use geocrawl::geo::GeoTable;
use geocrawl::io::{naming, read_shard, PartitionKey, PartitionWriter, DEFAULT_SHARD_CAP};
use geocrawl::line::Line;
use geocrawl::pipelines::{LangId, Pipeline, PipelineConfig, SegmentOrchestrator};
use geocrawl::processing::Consolidate;
use geocrawl::sources::LocalSource;

fn texts(root: &Path, key: &PartitionKey) -> Vec<String> {
    naming::list_shards(root, key)
        .unwrap()
        .into_iter()
        .flat_map(|(_, path)| read_shard(&path).unwrap())
        .map(|l| l.text)
        .collect()
}

/// run the extraction pipeline one segment per batch, leaving a duplicate across shards.
fn extract(src: &Path, dst: &Path) {
    let segments = vec![
        write_segment(src, "a", &gzip_members(&segment_a())),
        write_segment(src, "b", &gzip_members(&segment_b())),
    ];
    let mut config = PipelineConfig::new(dst);
    config.workers = 1;
    config.batch_size = 1;
    let summary = SegmentOrchestrator::new(segments, LocalSource::new(src), config)
        .run()
        .unwrap();
    assert_eq!(summary.done, 2);
}

fn english(_: &str) -> Option<String> {
    Some("en".to_string())
}

fn unlabelled(_: &str) -> Option<String> {
    None
}

/// one shard per text, in the `und` partition of France.
fn write_und(root: &Path, texts: &[&str]) {
    let geo = GeoTable::default();
    let france = geo.lookup("fr").unwrap();
    let mut wr = PartitionWriter::new(root, "local", 1);
    for (i, text) in texts.iter().enumerate() {
        let url = format!("http://example.fr/{}", i);
        wr.append(und(), Line::new(france, &url, 1, text.to_string()))
            .unwrap();
    }
    wr.finalize_all().unwrap();
}

fn und() -> PartitionKey {
    PartitionKey::new("europe_west", "France", "und")
}

#[test_log::test]
fn consolidate_then_identify() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    extract(src.path(), dst.path());

    let france = PartitionKey::new("europe_west", "France", "und");
    assert_eq!(naming::list_shards(dst.path(), &france).unwrap().len(), 2);
    assert_eq!(texts(dst.path(), &france).len(), 4);

    let report = Consolidate::in_place(dst.path(), DEFAULT_SHARD_CAP)
        .run(2)
        .unwrap();
    assert_eq!(report.consolidated, 1);
    // single-shard partitions are left as is
    assert_eq!(report.skipped, 2);

    let shards = naming::list_shards(dst.path(), &france).unwrap();
    assert_eq!(shards.len(), 1);
    assert_eq!(shards[0].0.index, 2);
    assert_eq!(texts(dst.path(), &france), vec![PROSE, OTHER, NEWS]);

    let summary = LangId::new(dst.path(), Some(Box::new(english)), DEFAULT_SHARD_CAP)
        .run()
        .unwrap();
    assert_eq!(summary.done, 3);
    assert_eq!(summary.total_rows(), 5);
    assert!(naming::list_partitions(dst.path())
        .unwrap()
        .iter()
        .all(|key| key.language == "en"));
    assert_eq!(
        texts(dst.path(), &france.with_language("en")),
        vec![PROSE, OTHER, NEWS]
    );

    let fin = tempfile::tempdir().unwrap();
    let report = Consolidate::into_dst(dst.path(), fin.path(), DEFAULT_SHARD_CAP)
        .run(2)
        .unwrap();
    assert_eq!(report.consolidated, 3);
    assert!(naming::list_partitions(dst.path()).unwrap().is_empty());
    assert_eq!(naming::list_partitions(fin.path()).unwrap().len(), 3);
    assert_eq!(
        texts(fin.path(), &france.with_language("en")),
        vec![PROSE, OTHER, NEWS]
    );
}

#[test]
fn shard_cap_is_honored() {
    let src = tempfile::tempdir().unwrap();
    let dst = tempfile::tempdir().unwrap();
    extract(src.path(), dst.path());

    Consolidate::in_place(dst.path(), 2).run(1).unwrap();

    let france = PartitionKey::new("europe_west", "France", "und");
    let shards = naming::list_shards(dst.path(), &france).unwrap();
    assert_eq!(shards.len(), 2);
    for (_, path) in &shards {
        assert!(read_shard(path).unwrap().len() <= 2);
    }
    assert_eq!(texts(dst.path(), &france), vec![PROSE, OTHER, NEWS]);
}

#[test]
fn reused_shard_names_are_classified() {
    let root = tempfile::tempdir().unwrap();
    let fin = tempfile::tempdir().unwrap();

    // tried once without a label: the output shard stays in und, marked as classified
    write_und(root.path(), &["first"]);
    let summary = LangId::new(root.path(), Some(Box::new(unlabelled)), DEFAULT_SHARD_CAP)
        .run()
        .unwrap();
    assert_eq!(summary.done, 1);
    assert_eq!(texts(root.path(), &und()), vec!["first"]);

    Consolidate::into_dst(root.path(), fin.path(), DEFAULT_SHARD_CAP)
        .run(1)
        .unwrap();
    assert!(naming::list_partitions(root.path()).unwrap().is_empty());

    // new shards start over at index 0
    write_und(root.path(), &["second", "third"]);
    let indices: Vec<u64> = naming::list_shards(root.path(), &und())
        .unwrap()
        .iter()
        .map(|(name, _)| name.index)
        .collect();
    assert_eq!(indices, vec![0, 1]);

    let summary = LangId::new(root.path(), Some(Box::new(english)), DEFAULT_SHARD_CAP)
        .run()
        .unwrap();
    assert_eq!(summary.done, 2);
    assert_eq!(summary.skipped, 0);
    assert!(texts(root.path(), &und()).is_empty());
    assert_eq!(
        texts(root.path(), &und().with_language("en")),
        vec!["second", "third"]
    );
}
