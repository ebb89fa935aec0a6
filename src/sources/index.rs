//! Segment index (`wet.paths(.gz)`): one segment path per line.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use super::GZIP_MAGIC;
use crate::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentIndex {
    segments: Vec<String>,
}

impl SegmentIndex {
    /// Read an index from a gzipped or plain stream. Blank lines are ignored.
    pub fn from_reader<R: BufRead + 'static>(mut reader: R) -> Result<Self, Error> {
        let is_gzip = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
        let lines: Box<dyn Iterator<Item = std::io::Result<String>>> = if is_gzip {
            Box::new(BufReader::new(MultiGzDecoder::new(reader)).lines())
        } else {
            Box::new(reader.lines())
        };

        let mut segments = Vec::new();
        for line in lines {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                segments.push(line.to_string());
            }
        }

        debug!("read {} segments from index", segments.len());
        Ok(Self { segments })
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }

    /// Keep `limit` segments starting at `offset`.
    pub fn slice(self, offset: usize, limit: Option<usize>) -> Self {
        let segments = self
            .segments
            .into_iter()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<String>> for SegmentIndex {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use flate2::{write::GzEncoder, Compression};

    use super::*;

    const PATHS: &str = "crawl-data/CC-MAIN-2022-40/segments/1/wet/a.warc.wet.gz
crawl-data/CC-MAIN-2022-40/segments/1/wet/b.warc.wet.gz

crawl-data/CC-MAIN-2022-40/segments/2/wet/c.warc.wet.gz
";

    #[test]
    fn plain() {
        let index = SegmentIndex::from_reader(Cursor::new(PATHS)).unwrap();
        assert_eq!(index.len(), 3);
        assert!(index.segments()[2].ends_with("c.warc.wet.gz"));
    }

    #[test]
    fn gzipped() {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(PATHS.as_bytes()).unwrap();
        let bytes = enc.finish().unwrap();

        let index = SegmentIndex::from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn slice() {
        let index = SegmentIndex::from_reader(Cursor::new(PATHS)).unwrap();
        let sliced = index.clone().slice(1, Some(1));
        assert_eq!(sliced.segments(), &index.segments()[1..2]);
        assert_eq!(index.slice(5, None).len(), 0);
    }
}
