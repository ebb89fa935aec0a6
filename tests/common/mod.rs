//! Synthetic WET segments.
#![allow(dead_code)]
use std::io::Write;
use std::path::Path;

use flate2::{write::GzEncoder, Compression};

pub const CRAWL: &str = "CC-MAIN-2022-40";
pub const PROSE: &str = "The committee met on Tuesday to discuss the new regional plan";
pub const OTHER: &str = "Residents were invited to share their views before the final vote";
pub const NEWS: &str = "The regional council will publish its detailed report next month";
pub const GERMAN: &str = "Der Stadtrat hat am Dienstag den neuen Haushaltsplan beschlossen";
pub const JAPANESE: &str = "今日は東京で大切な会議が開かれました。";

pub fn warc_record(kind: &str, url: &str, body: &str) -> Vec<u8> {
    format!(
        "WARC/1.0\r\n\
         WARC-Type: {kind}\r\n\
         WARC-Target-URI: {url}\r\n\
         WARC-Date: 2022-09-24T15:15:38Z\r\n\
         WARC-Record-ID: <urn:uuid:c7f19cbd-e348-48ff-9a92-4852b114b6db>\r\n\
         Content-Type: text/plain\r\n\
         Content-Length: {}\r\n\
         \r\n\
         {body}\r\n\r\n",
        body.len()
    )
    .into_bytes()
}

/// gzip each record as its own member.
pub fn gzip_members(records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for record in records {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(record).unwrap();
        out.extend(enc.finish().unwrap());
    }
    out
}

/// Identifier of segment `name` of the test crawl.
pub fn segment_id(name: &str) -> String {
    format!("crawl-data/{CRAWL}/segments/1664030331677.90/wet/{name}.warc.wet.gz")
}

/// Write `bytes` as segment `name` under `root`, returning the segment identifier.
pub fn write_segment(root: &Path, name: &str, bytes: &[u8]) -> String {
    let segment = segment_id(name);
    let path = root.join(&segment);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, bytes).unwrap();
    segment
}

/// A french, a japanese and a .com page.
pub fn segment_a() -> Vec<Vec<u8>> {
    vec![
        warc_record("warcinfo", "http://info/", "software: test"),
        warc_record(
            "conversion",
            "http://www.example.fr/a",
            &format!("Welcome to our site!\n{PROSE}\n{OTHER}"),
        ),
        warc_record("conversion", "https://news.example.jp/", JAPANESE),
        warc_record("conversion", "http://example.com/", NEWS),
    ]
}

/// A french page repeating a line of [segment_a] and a german page.
pub fn segment_b() -> Vec<Vec<u8>> {
    vec![
        warc_record(
            "conversion",
            "http://other.fr/b",
            &format!("{NEWS}\nHome | Contact | About us | Legal notice\n{PROSE}"),
        ),
        warc_record("response", "http://other.fr/b", "<html></html>"),
        warc_record("conversion", "http://example.de/", GERMAN),
    ]
}
