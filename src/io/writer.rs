/*! Partition writer.

Buffers lines per [PartitionKey] and seals them into capped, write-once shard files.

A shard is written to a hidden temporary file in the partition directory, then renamed
to its final name: a shard that exists under its final name is complete.
A failed flush keeps the buffered rows so that it can be attempted again.
!*/
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, error, info, warn};

use super::naming::{self, PartitionKey, ShardName};
use crate::error::Error;
use crate::line::Line;
use crate::processing::dedup;

/// Default maximum number of rows per shard.
pub const DEFAULT_SHARD_CAP: usize = 100_000;

/// Number of times [PartitionWriter::finalize_all] retries a failed flush.
pub const FLUSH_RETRIES: u32 = 3;

pub struct PartitionWriter {
    root: PathBuf,
    period: String,
    cap: usize,
    buffers: HashMap<PartitionKey, Vec<Line>>,
    next_index: HashMap<PartitionKey, u64>,
    rows_written: BTreeMap<PartitionKey, u64>,
}

impl PartitionWriter {
    /// Create a writer that seals shards under `root`, named with `period`.
    ///
    /// Nothing is created on disk until the first flush.
    pub fn new(root: &Path, period: &str, cap: usize) -> Self {
        Self {
            root: root.to_path_buf(),
            period: period.to_string(),
            cap: cap.max(1),
            buffers: HashMap::new(),
            next_index: HashMap::new(),
            rows_written: BTreeMap::new(),
        }
    }

    /// Buffer `line` in `key`'s partition.
    ///
    /// Once the buffer reaches the cap it is deduplicated and sealed,
    /// and the paths of the new shards are returned.
    pub fn append(&mut self, key: PartitionKey, line: Line) -> Result<Vec<PathBuf>, Error> {
        let buf = self.buffers.entry(key.clone()).or_default();
        buf.push(line);
        if buf.len() >= self.cap {
            self.flush(&key)
        } else {
            Ok(Vec::new())
        }
    }

    /// Seal whatever is buffered for `key`, even below the cap.
    pub fn finalize(&mut self, key: &PartitionKey) -> Result<Vec<PathBuf>, Error> {
        let sealed = self.flush(key)?;
        self.buffers.remove(key);
        Ok(sealed)
    }

    /// Finalize every partition that holds buffered rows, in key order.
    ///
    /// Each failed flush is retried [FLUSH_RETRIES] times before its error is returned.
    pub fn finalize_all(&mut self) -> Result<Vec<PathBuf>, Error> {
        let mut keys: Vec<PartitionKey> = self
            .buffers
            .iter()
            .filter(|(_, buf)| !buf.is_empty())
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();

        let mut sealed = Vec::with_capacity(keys.len());
        for key in keys {
            let mut attempt = 0;
            loop {
                match self.finalize(&key) {
                    Ok(paths) => {
                        sealed.extend(paths);
                        break;
                    }
                    Err(e) if attempt < FLUSH_RETRIES => {
                        attempt += 1;
                        warn!(
                            "{}: flush failed ({}), retry {}/{}",
                            key, e, attempt, FLUSH_RETRIES
                        );
                        std::thread::sleep(Duration::from_millis(50 * u64::from(attempt)));
                    }
                    Err(e) => {
                        error!("{}: giving up flushing {} rows", key, self.buffered(&key));
                        return Err(e);
                    }
                }
            }
        }

        Ok(sealed)
    }

    /// Number of rows currently buffered for `key`.
    pub fn buffered(&self, key: &PartitionKey) -> usize {
        self.buffers.get(key).map(Vec::len).unwrap_or(0)
    }

    /// Rows sealed so far, per partition.
    pub fn rows_written(&self) -> &BTreeMap<PartitionKey, u64> {
        &self.rows_written
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Deduplicate the buffer of `key` and seal it in shards of at most `cap` rows.
    fn flush(&mut self, key: &PartitionKey) -> Result<Vec<PathBuf>, Error> {
        let mut lines = match self.buffers.get_mut(key) {
            Some(buf) if !buf.is_empty() => dedup(std::mem::take(buf)),
            _ => return Ok(Vec::new()),
        };

        let mut sealed = Vec::new();
        while !lines.is_empty() {
            let rest = if lines.len() > self.cap {
                lines.split_off(self.cap)
            } else {
                Vec::new()
            };
            match self.seal(key, &lines) {
                Ok(path) => {
                    sealed.push(path);
                    lines = rest;
                }
                Err(e) => {
                    // rows stay buffered until a flush succeeds
                    lines.extend(rest);
                    self.buffers.insert(key.clone(), lines);
                    return Err(e);
                }
            }
        }

        Ok(sealed)
    }

    fn seal(&mut self, key: &PartitionKey, lines: &[Line]) -> Result<PathBuf, Error> {
        let index = match self.next_index.get(key) {
            Some(index) => *index,
            None => naming::next_index(&self.root, key)?,
        };
        let mut name = ShardName::new(key.clone(), &self.period, index);
        while name.path(&self.root).exists() {
            name.index += 1;
        }

        let path = name.path(&self.root);
        write_shard(&path, lines).map_err(|source| Error::WriteFailure {
            path: path.clone(),
            source,
        })?;

        self.next_index.insert(key.clone(), name.index + 1);
        *self.rows_written.entry(key.clone()).or_insert(0) += lines.len() as u64;
        info!("sealed {:?} ({} rows)", path, lines.len());
        Ok(path)
    }
}

/// Write `lines` as a gzipped csv file at `path`, through a temporary file.
fn write_shard(path: &Path, lines: &[Line]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = dir.join(format!(".{}.tmp", file_name));

    let res = write_rows(&tmp, lines).and_then(|_| std::fs::rename(&tmp, path));
    if res.is_err() && tmp.exists() {
        debug!("removing {:?}", tmp);
        let _ = std::fs::remove_file(&tmp);
    }
    res
}

fn write_rows(path: &Path, lines: &[Line]) -> std::io::Result<()> {
    let f = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(GzEncoder::new(f, Compression::default()));
    for line in lines {
        wtr.serialize(line)?;
    }
    let gz = wtr.into_inner().map_err(|e| e.into_error())?;
    let f = gz.finish()?;
    f.sync_all()
}
