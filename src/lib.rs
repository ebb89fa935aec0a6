//! # geocrawl
//!
//! Builds a geo-partitioned, deduplicated line corpus from CommonCrawl WET segments.
//!
//! Lines are extracted from `conversion` records, cleaned and filtered ([filtering]),
//! attributed to a country through the suffix of their page's host ([geo]),
//! deduplicated on a stable fingerprint ([processing]) and written into capped shards
//! partitioned by region, country and language ([io]).
//!
//! [pipelines] drives the whole thing over segments obtained through [sources].
pub mod error;
pub mod filtering;
pub mod geo;
pub mod identifiers;
pub mod io;
pub mod line;
pub mod pipelines;
pub mod processing;
pub mod sources;
