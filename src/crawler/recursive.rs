//! Link-following page discovery
//!
//! Breadth-first traversal from a seed URL, used when a site publishes no
//! sitemap. The frontier is a FIFO queue of `(url, depth)` pairs guarded by
//! a seen-set, so a URL is enqueued at most once per crawl regardless of how
//! many pages link to it. Page-count and depth bounds guarantee termination
//! on arbitrary link graphs, cycles included.

use crate::crawler::fetcher::fetch_page;
use crate::crawler::scope::ScopeFilter;
use crate::crawler::session::{CrawlSession, PageMap};
use crate::GenError;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Default maximum number of pages fetched in one crawl
pub const DEFAULT_MAX_PAGES: usize = 500;

/// Default maximum traversal depth from the seed
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Bounds for a link-following crawl
#[derive(Debug, Clone, Copy)]
pub struct CrawlLimits {
    /// Maximum number of distinct pages to fetch
    pub max_pages: usize,

    /// Maximum link distance from the seed URL
    pub max_depth: usize,
}

impl Default for CrawlLimits {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Crawler that discovers pages by following links breadth-first
pub struct RecursiveCrawler {
    client: Client,
    session: CrawlSession,
    limits: CrawlLimits,
}

impl RecursiveCrawler {
    /// Creates a link-following crawler seeded at `base_url`
    pub fn new(client: Client, base_url: &str, limits: CrawlLimits) -> Result<Self, GenError> {
        Ok(Self {
            client,
            session: CrawlSession::new(base_url)?,
            limits,
        })
    }

    /// Runs the breadth-first crawl and returns the fetched pages
    ///
    /// The loop dequeues in FIFO order, which bounds depth growth
    /// predictably and favors broad coverage over deep dives — the right
    /// trade-off for documentation trees. Entries beyond the depth bound
    /// are discarded; their descendants were never enqueued. Fetch failures
    /// skip the entry and continue, so one bad link never aborts the run.
    pub async fn crawl(mut self) -> PageMap {
        let seed = self.session.base_url().to_string();
        let scope = ScopeFilter::new(self.session.base_url(), self.session.domain());

        let mut frontier: VecDeque<(String, usize)> = VecDeque::new();
        frontier.push_back((seed.clone(), 0));

        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(seed.clone());

        tracing::info!("Starting recursive crawl from {}", seed);

        while self.session.page_count() < self.limits.max_pages {
            let Some((url, depth)) = frontier.pop_front() else {
                break;
            };

            if depth > self.limits.max_depth {
                continue;
            }

            let body = match fetch_page(&self.client, &url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Failed to fetch {}: {}", url, e);
                    continue;
                }
            };

            let links = extract_links(&body, &url);
            tracing::info!("Crawled (recursive): {} (depth {})", url, depth);
            self.session.record_page(url, body);

            for link in links {
                if !seen.contains(&link) && scope.is_in_scope(&link) {
                    seen.insert(link.clone());
                    frontier.push_back((link, depth + 1));
                }
            }
        }

        self.session.into_pages()
    }
}

/// Extracts every anchor target from a page, resolved against the page URL
///
/// Relative hrefs are made absolute and fragment components are stripped so
/// that `/guide#intro` and `/guide#usage` dedup to the same URL. Hrefs that
/// fail to resolve are dropped.
fn extract_links(html: &str, page_url: &str) -> Vec<String> {
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => return Vec::new(),
    };

    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Ok(mut resolved) = base.join(href.trim()) {
                    resolved.set_fragment(None);
                    links.push(resolved.to_string());
                }
            }
        }
    }

    links
}
