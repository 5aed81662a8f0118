#![forbid(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, forbidden_lint_groups)]

use crate::error::{Error, Result};
use herkunft::{BoxError, Classification, Medium, MediumEngine};
use serde::Deserialize;
use smol_str::SmolStr;
use std::collections::{hash_map::Entry, BTreeMap, HashMap};
use triomphe::Arc;
use url::Url;

pub mod error;

static EMBEDDED_TABLE: &str = include_str!("../referers.toml");

#[derive(Deserialize)]
struct RawSource {
    domains: Vec<String>,
    #[serde(default)]
    parameters: Vec<String>,
}

type RawTable = BTreeMap<SmolStr, BTreeMap<SmolStr, RawSource>>;

struct Source {
    medium: Medium,
    name: SmolStr,
    parameters: Vec<String>,
}

/// Medium engine backed by a table of known referrer domains
#[derive(Clone)]
pub struct RefererTable {
    domains: Arc<HashMap<String, Arc<Source>>>,
}

/// Fully-qualified hosts (`www.google.com.`) name the same site as their relative form
fn strip_root(host: &str) -> &str {
    host.strip_suffix('.').unwrap_or(host)
}

impl RefererTable {
    /// Parse a table in the layout of the embedded `referers.toml`
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawTable = toml::from_str(content)?;

        let mut domains = HashMap::new();
        for (medium, sources) in raw {
            for (name, raw_source) in sources {
                let source = Arc::new(Source {
                    medium: Medium::from(medium.as_str()),
                    name,
                    parameters: raw_source.parameters,
                });

                for domain in raw_source.domains {
                    match domains.entry(domain.to_ascii_lowercase()) {
                        Entry::Occupied(occupied) => {
                            return Err(Error::DuplicateDomain(occupied.key().clone()));
                        }
                        Entry::Vacant(vacant) => {
                            vacant.insert(Arc::clone(&source));
                        }
                    }
                }
            }
        }

        Ok(Self {
            domains: Arc::new(domains),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Find the entry for the host or its closest listed parent domain
    fn lookup(&self, host: &str) -> Option<&Arc<Source>> {
        let mut candidate = host;
        loop {
            if let Some(source) = self.domains.get(candidate) {
                return Some(source);
            }

            let (_, parent) = candidate.split_once('.')?;
            candidate = parent;
        }
    }

    #[must_use]
    pub fn lookup_url(&self, referrer: &str, target: &str) -> Classification {
        let Ok(referrer) = Url::parse(referrer) else {
            return Classification::new(Medium::Unknown);
        };

        if !matches!(referrer.scheme(), "http" | "https") {
            return Classification::new(Medium::Unknown);
        }

        let Some(host) = referrer.host_str().map(strip_root) else {
            return Classification::new(Medium::Unknown);
        };

        if let Ok(target) = Url::parse(target) {
            if target.host_str().map(strip_root) == Some(host) && target.port() == referrer.port()
            {
                return Classification::new(Medium::Internal);
            }
        }

        let Some(source) = self.lookup(host) else {
            return Classification::new(Medium::Unknown);
        };

        let classification =
            Classification::new(source.medium.clone()).with_source(source.name.clone());

        let term = source.parameters.iter().find_map(|parameter| {
            referrer
                .query_pairs()
                .find(|(key, value)| key == parameter.as_str() && !value.is_empty())
                .map(|(_, value)| value.into_owned())
        });

        match term {
            Some(term) => classification.with_term(term),
            None => classification,
        }
    }
}

impl Default for RefererTable {
    fn default() -> Self {
        Self::from_toml(EMBEDDED_TABLE).expect("[Bug] Embedded referer table is invalid")
    }
}

impl MediumEngine for RefererTable {
    #[inline]
    fn classify(&self, referrer: &str, target: &str) -> Result<Classification, BoxError> {
        Ok(self.lookup_url(referrer, target))
    }
}
