//! Partition keys and shard file naming.
//!
//! Shards live at `{root}/{region}/{country}/{language}/` and are named
//! `{region}.{country}.{language}.{period}.{index}.csv.gz`.
use std::fmt;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::Error;
use crate::line::Line;

/// Language of lines that have not been through language identification yet.
pub const UNKNOWN_LANGUAGE: &str = "und";

const EXTENSION: &str = "csv.gz";

/// (region, country, language) grouping of output lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionKey {
    pub region: String,
    pub country: String,
    pub language: String,
}

impl PartitionKey {
    pub fn new(region: &str, country: &str, language: &str) -> Self {
        Self {
            region: region.to_string(),
            country: country.to_string(),
            language: language.to_string(),
        }
    }

    /// Key of a freshly extracted line, whose language is not known yet.
    pub fn unidentified(line: &Line) -> Self {
        Self::new(&line.region, &line.country, UNKNOWN_LANGUAGE)
    }

    /// Same region and country, another language.
    pub fn with_language(&self, language: &str) -> Self {
        Self::new(&self.region, &self.country, language)
    }

    /// Directory holding the shards of this partition.
    pub fn dir(&self, root: &Path) -> PathBuf {
        root.join(&self.region)
            .join(&self.country)
            .join(&self.language)
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.region, self.country, self.language)
    }
}

/// Parsed shard file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardName {
    pub key: PartitionKey,
    pub period: String,
    pub index: u64,
}

impl ShardName {
    pub fn new(key: PartitionKey, period: &str, index: u64) -> Self {
        Self {
            key,
            period: period.to_string(),
            index,
        }
    }

    /// Parse a shard file name (not a path).
    ///
    /// Returns [None] for anything that is not a shard name.
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".csv.gz")?;
        let parts: Vec<&str> = stem.split('.').collect();
        match parts.as_slice() {
            [region, country, language, period, index]
                if ![region, country, language, period]
                    .iter()
                    .any(|part| part.is_empty()) =>
            {
                Some(Self {
                    key: PartitionKey::new(region, country, language),
                    period: period.to_string(),
                    index: index.parse().ok()?,
                })
            }
            _ => None,
        }
    }

    /// Parse the file name of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()?.to_str().and_then(Self::parse)
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}.{}.{}.{}.{}.{}",
            self.key.region, self.key.country, self.key.language, self.period, self.index, EXTENSION
        )
    }

    /// Full path of the shard under `root`.
    pub fn path(&self, root: &Path) -> PathBuf {
        self.key.dir(root).join(self.file_name())
    }
}

fn glob_shards(pattern: &str) -> Result<Vec<(ShardName, PathBuf)>, Error> {
    let mut shards = Vec::new();
    for path in glob::glob(pattern)? {
        let path = path?;
        if let Some(name) = ShardName::from_path(&path) {
            shards.push((name, path));
        }
    }
    Ok(shards)
}

/// Sealed shards of `key` under `root`, ordered by shard index.
pub fn list_shards(root: &Path, key: &PartitionKey) -> Result<Vec<(ShardName, PathBuf)>, Error> {
    let dir = Pattern::escape(&key.dir(root).to_string_lossy());
    let mut shards: Vec<_> = glob_shards(&format!("{}/*.{}", dir, EXTENSION))?
        .into_iter()
        .filter(|(name, _)| &name.key == key)
        .collect();
    shards.sort_by_key(|(name, _)| name.index);
    Ok(shards)
}

/// Every partition that holds at least one shard under `root`, sorted.
pub fn list_partitions(root: &Path) -> Result<Vec<PartitionKey>, Error> {
    let root = Pattern::escape(&root.to_string_lossy());
    let mut keys: Vec<PartitionKey> = glob_shards(&format!("{}/*/*/*/*.{}", root, EXTENSION))?
        .into_iter()
        .map(|(name, _)| name.key)
        .collect();
    keys.sort();
    keys.dedup();
    Ok(keys)
}

/// Index the next shard of `key` has to take: one past the largest existing index.
pub fn next_index(root: &Path, key: &PartitionKey) -> Result<u64, Error> {
    Ok(list_shards(root, key)?
        .last()
        .map(|(name, _)| name.index + 1)
        .unwrap_or(0))
}
