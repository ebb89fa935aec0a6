//! Corpus line: one accepted, cleaned text line with its page metadata.
use serde::{Deserialize, Serialize};

use crate::geo::Country;
use crate::processing::fingerprint::fingerprint;

/// One row of a shard file.
///
/// `line_id` is 1-based and scoped to the source record.
/// `fingerprint` is not persisted and is recomputed when reading shards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "LineID")]
    pub line_id: u64,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(skip)]
    pub fingerprint: u64,
}

impl Line {
    pub fn new(country: &Country, url: &str, line_id: u64, text: String) -> Self {
        Self {
            domain: country.code.to_string(),
            country: country.name.to_string(),
            region: country.region.to_string(),
            url: url.to_string(),
            line_id,
            fingerprint: fingerprint(&text),
            text,
        }
    }

    /// recompute the fingerprint from the text.
    pub fn refresh_fingerprint(&mut self) {
        self.fingerprint = fingerprint(&self.text);
    }
}
