//! Segment transport: how the byte stream of a segment is obtained.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;
use reqwest::Url;

use crate::error::Error;

/// Base URL of the CommonCrawl public dataset.
pub const BASE_URL: &str = "https://data.commoncrawl.org/";

/// Anything that can hand out the byte stream of a segment.
///
/// Implementations are shared by reference between workers.
pub trait SegmentSource: Sync {
    fn open(&self, segment: &str) -> Result<Box<dyn BufRead + Send>, Error>;
}

/// Segments materialized on disk, resolved under `root`.
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn path(&self, segment: &str) -> PathBuf {
        self.root.join(segment)
    }

    /// `true` if the segment is already on disk.
    pub fn is_materialized(&self, segment: &str) -> bool {
        self.path(segment).is_file()
    }
}

impl SegmentSource for LocalSource {
    fn open(&self, segment: &str) -> Result<Box<dyn BufRead + Send>, Error> {
        let path = self.path(segment);
        debug!("opening {:?}", path);
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Segments streamed over HTTP, without being written to disk.
pub struct HttpSource {
    base: Url,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(base: &str) -> Result<Self, Error> {
        Ok(Self {
            base: Url::parse(base)?,
            client: reqwest::blocking::Client::new(),
        })
    }

    pub fn commoncrawl() -> Result<Self, Error> {
        Self::new(BASE_URL)
    }

    pub fn url(&self, segment: &str) -> Result<Url, Error> {
        Ok(self.base.join(segment.trim_start_matches('/'))?)
    }
}

impl SegmentSource for HttpSource {
    fn open(&self, segment: &str) -> Result<Box<dyn BufRead + Send>, Error> {
        let url = self.url(segment)?;
        debug!("streaming {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(Box::new(BufReader::new(response)))
    }
}
