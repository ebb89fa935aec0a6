/*! Fingerprinting, deduplication and offline consolidation of shards. !*/
pub mod consolidate;
pub mod dedup;
pub mod fingerprint;

pub use consolidate::Consolidate;
pub use dedup::{dedup, FingerprintFilter};
pub use fingerprint::fingerprint;
