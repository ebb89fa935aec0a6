//! Shard reading.
//!
//! Fingerprints are not stored in shards, [ShardReader] recomputes them.
use std::fs::File;
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Error;
use crate::line::Line;

/// Iterator over the rows of one shard file.
pub struct ShardReader {
    rows: csv::DeserializeRecordsIntoIter<MultiGzDecoder<File>, Line>,
}

impl ShardReader {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(MultiGzDecoder::new(f));
        Ok(Self {
            rows: rdr.into_deserialize(),
        })
    }
}

impl Iterator for ShardReader {
    type Item = Result<Line, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        Some(row.map_err(Error::from).map(|mut line: Line| {
            line.refresh_fingerprint();
            line
        }))
    }
}

/// Read a whole shard in memory.
pub fn read_shard(path: &Path) -> Result<Vec<Line>, Error> {
    ShardReader::open(path)?.collect()
}
