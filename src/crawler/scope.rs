//! URL scope filtering
//!
//! Decides whether a discovered URL belongs to the documentation set being
//! crawled. Three rules, applied in order:
//!
//! 1. The URL must be prefixed by the base URL (anchors the crawl to a
//!    sub-path, not just a host)
//! 2. The URL's host must equal the session's domain
//! 3. The URL's path must not end in a known non-document extension
//!
//! The prefix and host checks together prevent scope creep to sibling doc
//! sets or external domains reachable via cross-links; the extension denylist
//! avoids wasting fetches on assets that cannot hold document content.

use crate::crawler::session::url_authority;
use url::Url;

/// File extensions that never hold document content
///
/// A closed set: extending it is a design change, not a runtime option.
const ASSET_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".css", ".js", ".xml", ".json", ".pdf", ".svg", ".zip",
];

/// Decides whether a URL is in scope for a crawl session
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    /// Slash-trimmed base URL used for prefix matching
    base_url: String,

    /// Lowercase authority (host, plus port when present) the crawl is
    /// confined to
    domain: String,
}

impl ScopeFilter {
    /// Creates a filter for the given base URL and domain
    pub fn new(base_url: &str, domain: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            domain: domain.to_lowercase(),
        }
    }

    /// Returns true if `url` passes all three scope rules
    pub fn is_in_scope(&self, url: &str) -> bool {
        if !url.starts_with(&self.base_url) {
            return false;
        }

        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return false,
        };

        match url_authority(&parsed) {
            Some(authority) if authority == self.domain => {}
            _ => return false,
        }

        let path = parsed.path().to_lowercase();
        !ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
    }
}
