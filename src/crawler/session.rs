//! Crawl session state
//!
//! A [`CrawlSession`] is the mutable state of one crawl run: the base URL it
//! is anchored to, the derived scheme/host, the set of visited URLs, and the
//! mapping from URL to fetched HTML. A session is owned by exactly one
//! crawler instance and discarded once its pages have been consumed.

use crate::GenError;
use std::collections::{BTreeMap, HashSet};
use url::Url;

/// Mapping from canonical page URL to fetched HTML content
///
/// A `BTreeMap` keeps iteration order deterministic, which makes the
/// generated artifacts reproducible for a fixed page set.
pub type PageMap = BTreeMap<String, String>;

/// Mutable state of a single crawl run
#[derive(Debug)]
pub struct CrawlSession {
    /// The base URL with any trailing slash trimmed
    base_url: String,

    /// URL scheme of the base URL ("http" or "https")
    scheme: String,

    /// Lowercase authority (host, plus port when non-default) of the base URL
    domain: String,

    /// URLs that have been successfully fetched
    visited: HashSet<String>,

    /// Successfully fetched pages, keyed by URL
    pages: PageMap,
}

impl CrawlSession {
    /// Creates a new session anchored to `base_url`
    ///
    /// The base URL must parse and carry a host; the trailing slash is
    /// trimmed so that prefix matching treats `https://a/docs` and
    /// `https://a/docs/` identically.
    pub fn new(base_url: &str) -> Result<Self, GenError> {
        let trimmed = base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&trimmed).map_err(|e| GenError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let domain = url_authority(&parsed).ok_or_else(|| GenError::MissingHost {
            url: base_url.to_string(),
        })?;

        Ok(Self {
            base_url: trimmed,
            scheme: parsed.scheme().to_string(),
            domain,
            visited: HashSet::new(),
            pages: PageMap::new(),
        })
    }

    /// The slash-trimmed base URL this session is anchored to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The scheme of the base URL
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The lowercase authority of the base URL (host, plus `:port` when one
    /// is present in the URL)
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns true if `url` has already been fetched in this session
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of pages fetched so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Records a successfully fetched page
    ///
    /// Keeps `visited` and `pages` in lock-step: every URL present in the
    /// page map is also marked visited.
    pub fn record_page(&mut self, url: String, body: String) {
        self.visited.insert(url.clone());
        self.pages.insert(url, body);
    }

    /// Consumes the session, yielding the fetched pages
    pub fn into_pages(self) -> PageMap {
        self.pages
    }
}

/// Extracts the lowercase authority (`host` or `host:port`) of a URL
///
/// The port is kept so that crawls against non-default ports stay anchored
/// to the right origin.
pub(crate) fn url_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}
