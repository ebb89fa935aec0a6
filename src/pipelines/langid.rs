/*! Language partitioning pass.

Moves lines out of `und` (unidentified language) partitions into per-language partitions.

Lines of a shard are grouped into documents by URL, in line id order, and each document is
classified once. Every line of a document goes to `{region}/{country}/{language}/`.

Progress is tracked with two kinds of markers under `{root}/.langid/`:
- `consumed/{shard}`: the shard's lines have been sealed in their new partitions, it can be deleted,
- `classified/{shard}`: the shard has been written by this pass into `und` and must not be classified again.

Markers are removed with their shard (here or by consolidation, see [clear_markers]),
so a later shard reusing the name is classified.
!*/
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info, warn};
use rayon::prelude::*;

use super::summary::RunSummary;
use super::Pipeline;
use crate::error::Error;
use crate::identifiers::Classify;
use crate::io::{naming, read_shard, PartitionKey, PartitionWriter, ShardName, UNKNOWN_LANGUAGE};
use crate::line::Line;

const LANGID_DIR: &str = ".langid";
const CONSUMED: &str = "consumed";
const CLASSIFIED: &str = "classified";

fn marker_path(root: &Path, kind: &str, name: &ShardName) -> PathBuf {
    root.join(LANGID_DIR).join(kind).join(name.file_name())
}

/// Remove the markers of shard `name` under `root`.
///
/// Must be called whenever a shard is deleted, so that a later shard reusing its
/// name is not mistaken for it.
pub fn clear_markers(root: &Path, name: &ShardName) -> Result<(), Error> {
    for kind in [CONSUMED, CLASSIFIED] {
        let path = marker_path(root, kind, name);
        if path.is_file() {
            std::fs::remove_file(path)?;
        }
    }
    Ok(())
}

/// Lines of one page.
struct Document {
    lines: Vec<Line>,
}

impl Document {
    fn text(&self) -> String {
        self.lines.iter().map(|line| line.text.as_str()).join("\n")
    }
}

/// Group lines by URL, keeping the order of first appearance of each URL.
fn documents(lines: Vec<Line>) -> Vec<Document> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut docs: Vec<Document> = Vec::new();
    for line in lines {
        match index.get(&line.url) {
            Some(&idx) => docs[idx].lines.push(line),
            None => {
                index.insert(line.url.clone(), docs.len());
                docs.push(Document { lines: vec![line] });
            }
        }
    }
    for doc in &mut docs {
        doc.lines.sort_by_key(|line| line.line_id);
    }
    docs
}

pub struct LangId {
    root: PathBuf,
    classifier: Option<Box<dyn Classify>>,
    cap: usize,
    workers: usize,
}

impl LangId {
    pub fn new(root: &Path, classifier: Option<Box<dyn Classify>>, cap: usize) -> Self {
        Self {
            root: root.to_path_buf(),
            classifier,
            cap,
            workers: rayon::current_num_threads(),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    fn marker(&self, kind: &str, name: &ShardName) -> PathBuf {
        marker_path(&self.root, kind, name)
    }

    fn mark(&self, kind: &str, name: &ShardName) -> Result<(), Error> {
        let path = self.marker(kind, name);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, b"")?;
        Ok(())
    }

    /// Language of each document, [UNKNOWN_LANGUAGE] when the classifier has no answer.
    fn classify(&self, classifier: &dyn Classify, docs: &[Document]) -> Vec<String> {
        docs.par_iter()
            .map(|doc| match classifier.classify(&doc.text()) {
                Ok(Some(lang)) => lang,
                Ok(None) => UNKNOWN_LANGUAGE.to_string(),
                Err(e) => {
                    warn!("{}: classification failed: {}", doc.lines[0].url, e);
                    UNKNOWN_LANGUAGE.to_string()
                }
            })
            .collect()
    }

    /// Classify and move the lines of one shard, then delete it.
    fn shard(
        &self,
        classifier: &dyn Classify,
        name: &ShardName,
        path: &Path,
        summary: &mut RunSummary,
    ) -> Result<(), Error> {
        let docs = documents(read_shard(path)?);
        let langs = self.classify(classifier, &docs);

        let mut writer = PartitionWriter::new(&self.root, &name.period, self.cap);
        for (doc, lang) in docs.into_iter().zip(langs) {
            let key = name.key.with_language(&lang);
            for line in doc.lines {
                writer.append(key.clone(), line)?;
            }
        }
        let sealed = writer.finalize_all()?;

        for out in sealed.iter().filter_map(|path| ShardName::from_path(path)) {
            if out.key.language == UNKNOWN_LANGUAGE {
                self.mark(CLASSIFIED, &out)?;
            }
        }
        self.mark(CONSUMED, name)?;
        std::fs::remove_file(path)?;
        clear_markers(&self.root, name)?;

        for (key, rows) in writer.rows_written() {
            summary.add_rows(key, *rows);
        }
        info!("{:?}: moved into {} shards", path, sealed.len());
        Ok(())
    }
}

impl Pipeline<RunSummary> for LangId {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<RunSummary, Error> {
        info!("geocrawl language pass v{}", Self::version());
        let mut summary = RunSummary::default();
        let keys: Vec<PartitionKey> = naming::list_partitions(&self.root)?
            .into_iter()
            .filter(|key| key.language == UNKNOWN_LANGUAGE)
            .collect();

        let mut shards = Vec::new();
        for key in &keys {
            shards.extend(naming::list_shards(&self.root, key)?);
        }

        let classifier = match &self.classifier {
            Some(classifier) => classifier.as_ref(),
            None => {
                warn!("no classifier: {} shards left in place", shards.len());
                summary.skipped = shards.len();
                return Ok(summary);
            }
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| Error::Custom(e.to_string()))?;

        for (name, path) in shards {
            if self.marker(CLASSIFIED, &name).is_file() {
                debug!("{:?}: already classified", path);
                summary.skipped += 1;
                continue;
            }
            if self.marker(CONSUMED, &name).is_file() {
                debug!("{:?}: already moved, removing", path);
                std::fs::remove_file(&path)?;
                clear_markers(&self.root, &name)?;
                summary.skipped += 1;
                continue;
            }

            match pool.install(|| self.shard(classifier, &name, &path, &mut summary)) {
                Ok(()) => summary.done += 1,
                Err(e @ Error::WriteFailure { .. }) => return Err(e),
                Err(e) => {
                    warn!("{:?}: {}", path, e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}
