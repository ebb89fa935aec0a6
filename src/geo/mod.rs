/*! Geographic classification of pages.

A page is attributed to a country through the suffix of its host (`example.fr` -> `fr`).
Tables are static ([tables]) and loaded once into an immutable [GeoTable] that is shared
by reference between workers.
!*/
pub mod tables;

use std::collections::HashMap;

use url::{Host, Url};

/// Second level labels that are not part of the registrable name (`example.co.uk` -> `example`).
const SECOND_LEVEL: &[&str] = &["ac", "co", "com", "edu", "go", "gov", "ne", "net", "or", "org"];

/// Country attributed to a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

/// Immutable suffix -> [Country] lookup.
pub struct GeoTable {
    countries: HashMap<&'static str, Country>,
    idn: HashMap<&'static str, &'static str>,
}

impl GeoTable {
    /// Build a table from `(suffix, name, region)` entries and `(ascii, unicode)` IDN aliases.
    pub fn new(
        entries: &[(&'static str, &'static str, &'static str)],
        idn: &[(&'static str, &'static str)],
    ) -> Self {
        let countries = entries
            .iter()
            .map(|&(code, name, region)| {
                (
                    code,
                    Country {
                        code,
                        name,
                        region,
                    },
                )
            })
            .collect();
        let idn = idn.iter().copied().collect();
        Self { countries, idn }
    }

    /// Look `suffix` up. Internationalized suffixes are accepted in both forms.
    ///
    /// Returns [None] if the suffix is not a recognized country suffix.
    pub fn lookup(&self, suffix: &str) -> Option<&Country> {
        let suffix = suffix.to_lowercase();
        let suffix = self
            .idn
            .get(suffix.as_str())
            .copied()
            .unwrap_or(suffix.as_str());
        self.countries.get(suffix)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for GeoTable {
    fn default() -> Self {
        Self::new(tables::COUNTRIES, tables::IDN_SUFFIXES)
    }
}

/// Registrable name and suffix of a host.
#[derive(Debug, PartialEq, Eq)]
pub struct DomainParts {
    pub domain: String,
    pub suffix: String,
}

impl DomainParts {
    /// Split the host of `url`.
    ///
    /// Returns [None] for unparsable URLs, IP hosts and single-label hosts.
    pub fn from_url(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        let host = match url.host()? {
            Host::Domain(d) => d.trim_end_matches('.').to_lowercase(),
            Host::Ipv4(_) | Host::Ipv6(_) => return None,
        };
        let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();

        match labels.as_slice() {
            [] | [_] => None,
            [.., name, second, suffix] if SECOND_LEVEL.contains(second) => Some(Self {
                domain: name.to_string(),
                suffix: suffix.to_string(),
            }),
            [.., name, suffix] => Some(Self {
                domain: name.to_string(),
                suffix: suffix.to_string(),
            }),
        }
    }
}
