//! Materializing segments on disk.
//!
//! Downloads are blocking and run on a dedicated [rayon] pool.
//! A failed download never stops the others: results are returned per segment.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;
use reqwest::Url;

use crate::error::Error;

use super::transport::{LocalSource, BASE_URL};
use super::SegmentIndex;

/// Path of the segment index of a crawl (`CC-MAIN-2022-40`), relative to the dataset root.
pub fn index_path(crawl: &str) -> String {
    format!("crawl-data/{}/wet.paths.gz", crawl)
}

/// holds the dataset root and
/// http client that will make the requests.
pub struct Downloader {
    base: Url,
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new(base: &str) -> Result<Self, Error> {
        Ok(Self {
            base: Url::parse(base)?,
            client: reqwest::blocking::Client::new(),
        })
    }

    pub fn commoncrawl() -> Result<Self, Error> {
        Self::new(BASE_URL)
    }

    /// Download `path` (relative to the dataset root) into `dst/path`.
    ///
    /// Already materialized files are not downloaded again.
    /// Content is written to a `.part` file that is renamed once complete.
    pub fn download(&self, path: &str, dst: &Path) -> Result<PathBuf, Error> {
        let local = LocalSource::new(dst);
        let out = local.path(path);
        if local.is_materialized(path) {
            debug!("{:?} already exists, skipping", out);
            return Ok(out);
        }
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let url = self.base.join(path.trim_start_matches('/'))?;
        debug!("downloading {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;

        let mut part = out.clone().into_os_string();
        part.push(".part");
        let part = PathBuf::from(part);

        let mut buf = BufReader::new(response);
        let mut f = File::create(&part)?;
        std::io::copy(&mut buf, &mut f)?;
        f.sync_all()?;
        std::fs::rename(&part, &out)?;

        Ok(out)
    }

    /// Download and parse the segment index of `crawl`.
    pub fn fetch_index(&self, crawl: &str, dst: &Path) -> Result<SegmentIndex, Error> {
        let path = self.download(&index_path(crawl), dst)?;
        info!("segment index at {:?}", path);
        SegmentIndex::from_path(&path)
    }

    /// Download every segment, using `n_tasks` concurrent downloads.
    ///
    /// Results are in the order of `segments`.
    pub fn download_all(
        &self,
        segments: &[String],
        dst: &Path,
        n_tasks: usize,
    ) -> Result<Vec<(String, Result<PathBuf, Error>)>, Error> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(n_tasks)
            .build()
            .map_err(|e| Error::Custom(e.to_string()))?;
        let nb_segments = segments.len();

        let results = pool.install(|| {
            segments
                .par_iter()
                .enumerate()
                .map(|(idx, segment)| {
                    info!("downloading {}/{}: {}", idx + 1, nb_segments, segment);
                    let res = self.download(segment, dst);
                    if let Err(e) = &res {
                        warn!("could not download {}: {}", segment, e);
                    }
                    (segment.clone(), res)
                })
                .collect()
        });

        Ok(results)
    }
}
