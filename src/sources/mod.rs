//! Segment sources.
//!
//! - [commoncrawl] parses a WET segment stream into archive records,
//! - [index] reads segment lists (`wet.paths.gz`),
//! - [transport] opens segment streams, locally or over HTTP,
//! - [download] materializes segments on disk.
pub mod commoncrawl;
pub mod download;
pub mod index;
pub mod transport;

pub use commoncrawl::{ArchiveRecord, Wet};
pub use index::SegmentIndex;
pub use transport::{HttpSource, LocalSource, SegmentSource};

/// Magic bytes of a gzip member.
pub(crate) const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
