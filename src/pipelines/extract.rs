/*! Line extraction.

Turns one `conversion` record into the cleaned, accepted [Line]s of its page.

A record is skipped as a whole if its URL has no recognized country suffix, if its
domain or suffix is excluded, or if its body is not valid UTF-8.
Skips are not errors: they are reported as a [Skip] and logged at `debug` level.
!*/
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::filtering::LineFilter;
use crate::geo::{DomainParts, GeoTable};
use crate::line::Line;
use crate::sources::ArchiveRecord;

/// Reason a record yields no lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// missing or unparsable target URL.
    NoUrl,
    UnrecognizedSuffix,
    Excluded,
    Encoding,
}

/// Domains and country suffixes to always skip.
///
/// Domains are registrable names without suffix (`blogspot` for `www.blogspot.fr`).
#[derive(Debug, Default, Clone)]
pub struct Exclusions {
    domains: HashSet<String>,
    suffixes: HashSet<String>,
}

impl Exclusions {
    pub fn new<D, S>(domains: D, suffixes: S) -> Self
    where
        D: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        Self {
            domains: domains.into_iter().map(|d| d.to_lowercase()).collect(),
            suffixes: suffixes
                .into_iter()
                .map(|s| s.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Load exclusion lists from files, one entry per line.
    pub fn from_paths(domains: Option<&Path>, suffixes: Option<&Path>) -> Result<Self, Error> {
        let domains = match domains {
            Some(path) => read_list(path)?,
            None => Vec::new(),
        };
        let suffixes = match suffixes {
            Some(path) => read_list(path)?,
            None => Vec::new(),
        };
        Ok(Self::new(domains, suffixes))
    }

    /// Returns `true` if `domain` or `suffix` is excluded.
    pub fn excludes(&self, domain: &str, suffix: &str) -> bool {
        self.domains.contains(domain) || self.suffixes.contains(suffix)
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty() && self.suffixes.is_empty()
    }
}

/// Read a list file, ignoring blank lines and `#` comments.
fn read_list(path: &Path) -> Result<Vec<String>, Error> {
    let f = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();
    for line in f.lines() {
        let line = line?;
        let entry = line.split('#').next().unwrap_or("").trim();
        if !entry.is_empty() {
            entries.push(entry.to_string());
        }
    }
    Ok(entries)
}

/// Line boundaries: `\n`, `\r` and the other Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Shared, read-only extraction context.
pub struct LineExtractor<'a> {
    geo: &'a GeoTable,
    filter: &'a LineFilter,
    exclusions: &'a Exclusions,
}

impl<'a> LineExtractor<'a> {
    pub fn new(geo: &'a GeoTable, filter: &'a LineFilter, exclusions: &'a Exclusions) -> Self {
        Self {
            geo,
            filter,
            exclusions,
        }
    }

    /// Extract the accepted lines of `record`.
    ///
    /// Line ids start at 1 and are dense over the accepted lines of the record.
    pub fn extract(&self, record: &ArchiveRecord) -> Result<Vec<Line>, Skip> {
        let url = record.url.as_deref().ok_or(Skip::NoUrl)?;
        let parts = DomainParts::from_url(url).ok_or(Skip::NoUrl)?;
        let country = self
            .geo
            .lookup(&parts.suffix)
            .ok_or(Skip::UnrecognizedSuffix)?;

        if self.exclusions.excludes(&parts.domain, &parts.suffix)
            || self.exclusions.excludes(&parts.domain, country.code)
        {
            debug!("{}: excluded", url);
            return Err(Skip::Excluded);
        }

        let body = std::str::from_utf8(&record.body).map_err(|e| {
            debug!("{}: invalid body encoding: {}", url, e);
            Skip::Encoding
        })?;

        // `\r\n` yields an empty piece, dropped by the pre-filter
        let lines = body
            .split(is_line_break)
            .filter(|raw| self.filter.pre_filter(raw))
            .filter_map(|raw| self.filter.filter(raw))
            .zip(1..)
            .map(|(text, line_id)| Line::new(country, url, line_id, text))
            .collect();

        Ok(lines)
    }
}
