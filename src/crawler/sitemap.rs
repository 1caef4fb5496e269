//! Sitemap-driven page discovery
//!
//! This module locates and parses sitemap documents for a site:
//! - Probes the four conventional locations (`sitemap.xml` and
//!   `sitemap_index.xml` under both the base path and the domain root)
//! - Collects additional locations declared by `sitemap:` directives in
//!   robots.txt
//! - Resolves one level of sitemap-of-sitemaps indirection
//! - Tolerates both namespaced and non-namespaced sitemap XML
//!
//! Discovery is best-effort throughout: a candidate that fails to fetch,
//! is not XML, or is malformed is logged and skipped, never fatal. An empty
//! result means "no sitemap found", which the orchestrator treats as the
//! trigger for the link-following fallback.

use crate::crawler::fetcher::{fetch_page, fetch_with_timeout, PROBE_TIMEOUT};
use crate::crawler::scope::ScopeFilter;
use crate::crawler::session::{CrawlSession, PageMap};
use crate::{GenError, SitemapError};
use reqwest::Client;

/// A parsed sitemap document
///
/// Either a sitemap index (whose locations point at further sitemaps) or a
/// direct urlset (whose locations are page URLs).
#[derive(Debug, PartialEq, Eq)]
pub enum SitemapDocument {
    /// `<sitemapindex>`: locations of child sitemaps
    Index(Vec<String>),
    /// `<urlset>`: locations of pages
    UrlSet(Vec<String>),
}

/// Crawler that discovers pages through sitemap documents
pub struct SitemapCrawler {
    client: Client,
    session: CrawlSession,
}

impl SitemapCrawler {
    /// Creates a sitemap crawler anchored to `base_url`
    pub fn new(client: Client, base_url: &str) -> Result<Self, GenError> {
        Ok(Self {
            client,
            session: CrawlSession::new(base_url)?,
        })
    }

    /// Discovers page URLs from the site's sitemaps
    ///
    /// Candidates are probed in a fixed, deduplicated order; scanning stops
    /// at the first candidate that yields at least one URL. The returned
    /// list is **not** scope-filtered — that is applied uniformly by the
    /// caller, so that filtering behaves identically for both strategies.
    ///
    /// An empty vector signals "no sitemap found", not an error.
    pub async fn discover(&self) -> Vec<String> {
        let robots_sitemaps = self.robots_directives().await;
        let candidates = candidate_locations(
            self.session.base_url(),
            self.session.scheme(),
            self.session.domain(),
            &robots_sitemaps,
        );

        let mut urls = Vec::new();

        for candidate in candidates {
            tracing::debug!("Checking for sitemap at: {}", candidate);

            let content =
                match fetch_with_timeout(&self.client, &candidate, PROBE_TIMEOUT).await {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::debug!("Sitemap candidate {} unavailable: {}", candidate, e);
                        continue;
                    }
                };

            match parse_sitemap(&content) {
                Ok(SitemapDocument::UrlSet(locs)) => {
                    urls.extend(locs);
                }
                Ok(SitemapDocument::Index(children)) => {
                    tracing::info!("Found sitemap index at {}", candidate);
                    self.expand_index(children, &mut urls).await;
                }
                Err(SitemapError::NotXml) => {
                    tracing::debug!("Candidate {} is not XML, skipping", candidate);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse sitemap at {}: {}", candidate, e);
                }
            }

            if !urls.is_empty() {
                break;
            }
        }

        urls
    }

    /// Fetches and parses the children of a sitemap index
    ///
    /// Exactly one level of indirection is resolved: a child that turns out
    /// to be another index is dropped. This keeps the worst-case fetch
    /// volume predictable; deeper index chains are vanishingly rare in
    /// practice.
    async fn expand_index(&self, children: Vec<String>, urls: &mut Vec<String>) {
        for child in children {
            let content = match fetch_with_timeout(&self.client, &child, PROBE_TIMEOUT).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!("Child sitemap {} unavailable: {}", child, e);
                    continue;
                }
            };

            match parse_sitemap(&content) {
                Ok(SitemapDocument::UrlSet(locs)) => urls.extend(locs),
                Ok(SitemapDocument::Index(_)) => {
                    tracing::warn!(
                        "Nested sitemap index at {} exceeds the one-level bound, ignoring",
                        child
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to parse child sitemap at {}: {}", child, e);
                }
            }
        }
    }

    /// Reads `sitemap:` directives from the domain's robots.txt
    async fn robots_directives(&self) -> Vec<String> {
        let robots_url = format!(
            "{}://{}/robots.txt",
            self.session.scheme(),
            self.session.domain()
        );

        match fetch_with_timeout(&self.client, &robots_url, PROBE_TIMEOUT).await {
            Ok(content) => sitemap_directives(&content),
            Err(e) => {
                tracing::debug!("robots.txt unavailable at {}: {}", robots_url, e);
                Vec::new()
            }
        }
    }

    /// Runs sitemap discovery, then fetches every discovered in-scope page
    ///
    /// Consumes the crawler and returns the session's page map. Individual
    /// fetch failures are logged and skipped.
    pub async fn crawl(mut self) -> PageMap {
        let discovered = self.discover().await;

        let scope = ScopeFilter::new(self.session.base_url(), self.session.domain());
        let in_scope: Vec<String> = discovered
            .iter()
            .filter(|u| scope.is_in_scope(u))
            .cloned()
            .collect();

        tracing::info!(
            "Sitemap: found {} URLs, {} matched prefix {}",
            discovered.len(),
            in_scope.len(),
            self.session.base_url()
        );

        for url in in_scope {
            if self.session.is_visited(&url) {
                continue;
            }

            match fetch_page(&self.client, &url).await {
                Ok(body) => {
                    tracing::info!("Crawled: {}", url);
                    self.session.record_page(url, body);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", url, e);
                }
            }
        }

        self.session.into_pages()
    }
}

/// Builds the ordered, deduplicated list of sitemap candidate locations
///
/// The four fixed locations come first; robots.txt-declared sitemaps are
/// additional, not substitutive, so they are appended after. Duplicates keep
/// their first position.
fn candidate_locations(
    base_url: &str,
    scheme: &str,
    domain: &str,
    robots_sitemaps: &[String],
) -> Vec<String> {
    let mut candidates = vec![
        format!("{}/sitemap.xml", base_url),
        format!("{}/sitemap_index.xml", base_url),
        format!("{}://{}/sitemap.xml", scheme, domain),
        format!("{}://{}/sitemap_index.xml", scheme, domain),
    ];
    candidates.extend(robots_sitemaps.iter().cloned());

    let mut deduped = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !deduped.contains(&candidate) {
            deduped.push(candidate);
        }
    }
    deduped
}

/// Extracts `sitemap:` directive values from robots.txt content
///
/// The directive name is matched case-insensitively; everything after the
/// first colon is the declared URL.
fn sitemap_directives(robots: &str) -> Vec<String> {
    robots
        .lines()
        .map(str::trim)
        .filter(|line| line.to_ascii_lowercase().starts_with("sitemap:"))
        .filter_map(|line| line.split_once(':').map(|(_, rest)| rest.trim().to_string()))
        .filter(|url| !url.is_empty())
        .collect()
}

/// Parses sitemap XML into either an index or a urlset
///
/// Content that does not start with `<` (after trimming whitespace) fails
/// the cheap pre-filter with `SitemapError::NotXml` before any structured
/// parse is attempted. Tag lookups use local names only, so documents with
/// and without the standard sitemap namespace parse identically.
pub fn parse_sitemap(content: &str) -> Result<SitemapDocument, SitemapError> {
    if !content.trim_start().starts_with('<') {
        return Err(SitemapError::NotXml);
    }

    let doc = roxmltree::Document::parse(content)?;
    let root = doc.root_element();

    if root.tag_name().name().contains("sitemapindex") {
        Ok(SitemapDocument::Index(collect_locs(&doc, "sitemap")))
    } else {
        Ok(SitemapDocument::UrlSet(collect_locs(&doc, "url")))
    }
}

/// Collects the `<loc>` text of every `<{entry_tag}>` element in the document
fn collect_locs(doc: &roxmltree::Document, entry_tag: &str) -> Vec<String> {
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == entry_tag)
        .filter_map(|entry| {
            entry
                .children()
                .find(|c| c.is_element() && c.tag_name().name() == "loc")
                .and_then(|loc| loc.text())
                .map(|text| text.trim().to_string())
        })
        .filter(|loc| !loc.is_empty())
        .collect()
}
