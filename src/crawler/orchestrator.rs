//! Strategy orchestration
//!
//! Runs the two discovery strategies in their mandated order: sitemaps are
//! authoritative and cheap, so sitemap discovery always goes first;
//! link-following is the fallback, triggered only when the sitemap strategy
//! yields an empty page set — never pre-emptively. When both strategies come
//! up empty the whole generation request fails with a clear "no pages found"
//! outcome rather than producing a partial artifact.

use crate::crawler::fetcher::build_http_client;
use crate::crawler::recursive::{CrawlLimits, RecursiveCrawler};
use crate::crawler::session::PageMap;
use crate::crawler::sitemap::SitemapCrawler;
use crate::{GenError, Result};
use reqwest::Client;
use std::fmt;

/// The discovery strategy that produced a page set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Pages came from sitemap discovery
    Sitemap,
    /// Pages came from breadth-first link following
    Recursive,
}

impl Strategy {
    /// Stable label for logs and user-facing messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Sitemap => "sitemap",
            Strategy::Recursive => "recursive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orchestrates page discovery for a documentation site
///
/// Owns the shared HTTP client and the crawl bounds; each operation spins up
/// a fresh crawl session, so a `Generator` can serve multiple sites.
pub struct Generator {
    client: Client,
    limits: CrawlLimits,
}

impl Generator {
    /// Creates a generator with default crawl limits
    pub fn new() -> Result<Self> {
        Self::with_limits(CrawlLimits::default())
    }

    /// Creates a generator with explicit crawl limits
    pub fn with_limits(limits: CrawlLimits) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            limits,
        })
    }

    /// The HTTP client shared by all crawls of this generator
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Discovers pages via the site's sitemaps
    ///
    /// An empty map signals "no sitemap found", not an error.
    pub async fn discover_via_sitemap(&self, url: &str) -> Result<PageMap> {
        let crawler = SitemapCrawler::new(self.client.clone(), url)?;
        Ok(crawler.crawl().await)
    }

    /// Discovers pages by following links breadth-first from `url`
    pub async fn crawl_via_links(&self, url: &str) -> Result<PageMap> {
        let crawler = RecursiveCrawler::new(self.client.clone(), url, self.limits)?;
        Ok(crawler.crawl().await)
    }

    /// Discovers the site's page set, sitemap-first
    ///
    /// Returns the pages together with the strategy that produced them.
    /// The fallback ordering is a hard contract: link following runs only
    /// after sitemap discovery has returned an empty page set.
    pub async fn generate(&self, url: &str) -> Result<(PageMap, Strategy)> {
        let pages = self.discover_via_sitemap(url).await?;
        if !pages.is_empty() {
            tracing::info!("Sitemap strategy yielded {} pages for {}", pages.len(), url);
            return Ok((pages, Strategy::Sitemap));
        }

        tracing::info!(
            "Sitemap strategy found no pages for {}, falling back to recursive crawl",
            url
        );

        let pages = self.crawl_via_links(url).await?;
        if pages.is_empty() {
            return Err(GenError::NoPages {
                url: url.to_string(),
            });
        }

        tracing::info!(
            "Recursive strategy yielded {} pages for {}",
            pages.len(),
            url
        );
        Ok((pages, Strategy::Recursive))
    }
}
