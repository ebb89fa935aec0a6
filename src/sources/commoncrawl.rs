//! Segment parser.
//!
//! Mainly exists to wrap warc's library [warc::WarcReader] and a multi-member gzip decoder.
//!
//! [Wet] implements [Iterator] over the `conversion` records of a segment.
use std::io::{BufRead, BufReader};

use flate2::read::MultiGzDecoder;
use warc::{RecordIter, RecordType, WarcHeader, WarcReader};

use super::GZIP_MAGIC;
use crate::error::Error;

/// A `conversion` record: the extracted text of one captured page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRecord {
    pub url: Option<String>,
    pub body: Vec<u8>,
}

/// Wet/Segment instance, generic over reader type.
///
/// The iterator is lazy, finite and not restartable. It stops after the first framing
/// or decompression error, which it yields as an [Error::Warc].
pub struct Wet<T: BufRead> {
    iter: RecordIter<T>,
    failed: bool,
}

impl Wet<Box<dyn BufRead + Send>> {
    /// Create a new reader from a stream that may or may not be gzipped.
    pub fn from_reader<R: BufRead + Send + 'static>(mut reader: R) -> Result<Self, Error> {
        let is_gzip = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
        let reader: Box<dyn BufRead + Send> = if is_gzip {
            // CommonCrawl segments are multi-member gzip files.
            Box::new(BufReader::new(MultiGzDecoder::new(reader)))
        } else {
            Box::new(reader)
        };

        Ok(Self::new(reader))
    }
}

impl<T: BufRead> Wet<T> {
    pub fn new(reader: T) -> Self {
        Self {
            iter: WarcReader::new(reader).iter_records(),
            failed: false,
        }
    }
}

impl<T: BufRead> Iterator for Wet<T> {
    type Item = Result<ArchiveRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            match self.iter.next()? {
                Ok(record) => {
                    if !matches!(record.warc_type(), RecordType::Conversion) {
                        continue;
                    }
                    let url = record
                        .header(WarcHeader::TargetURI)
                        .map(|url| url.into_owned());
                    let (_, body) = record.into_raw_parts();
                    return Some(Ok(ArchiveRecord { url, body }));
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(Error::Warc(e)));
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::{Cursor, Write};

    use flate2::{write::GzEncoder, Compression};

    use super::*;

    /// Serialize a WARC record by hand.
    pub fn warc_record(kind: &str, url: &str, body: &str) -> Vec<u8> {
        format!(
            "WARC/1.0\r\n\
             WARC-Type: {kind}\r\n\
             WARC-Target-URI: {url}\r\n\
             WARC-Date: 2021-02-24T17:02:28Z\r\n\
             WARC-Record-ID: <urn:uuid:c7f19cbd-e348-48ff-9a92-4852b114b6db>\r\n\
             Content-Type: text/plain\r\n\
             Content-Length: {}\r\n\
             \r\n\
             {body}\r\n\r\n",
            body.len()
        )
        .into_bytes()
    }

    /// gzip each record as its own member, as CommonCrawl does.
    pub fn gzip_members(records: &[Vec<u8>]) -> Vec<u8> {
        let mut out = Vec::new();
        for record in records {
            let mut enc = GzEncoder::new(Vec::new(), Compression::default());
            enc.write_all(record).unwrap();
            out.extend(enc.finish().unwrap());
        }
        out
    }

    fn segment() -> Vec<Vec<u8>> {
        vec![
            warc_record("warcinfo", "http://info/", "software: test"),
            warc_record("conversion", "http://example.fr/", "bonjour\nle monde"),
            warc_record("response", "http://example.fr/", "<html></html>"),
            warc_record("conversion", "http://example.de/", "hallo welt"),
        ]
    }

    #[test]
    fn plain_stream() {
        let bytes: Vec<u8> = segment().concat();
        let wet = Wet::from_reader(Cursor::new(bytes)).unwrap();
        let records: Vec<ArchiveRecord> = wet.map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url.as_deref(), Some("http://example.fr/"));
        assert_eq!(records[0].body, b"bonjour\nle monde");
        assert_eq!(records[1].url.as_deref(), Some("http://example.de/"));
    }

    #[test]
    fn gzip_stream() {
        let bytes = gzip_members(&segment());
        let wet = Wet::from_reader(Cursor::new(bytes)).unwrap();
        let records: Vec<ArchiveRecord> = wet.map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].body, b"hallo welt");
    }

    #[test]
    fn truncated_stream_stops() {
        let mut bytes: Vec<u8> = segment().concat();
        bytes.truncate(bytes.len() - 8);
        let wet = Wet::from_reader(Cursor::new(bytes)).unwrap();
        let results: Vec<_> = wet.collect();

        assert!(results.last().unwrap().is_err());
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
        assert!(results[0].is_ok());
    }

    #[test]
    fn empty_stream() {
        let wet = Wet::from_reader(Cursor::new(Vec::new())).unwrap();
        assert_eq!(wet.count(), 0);
    }
}
