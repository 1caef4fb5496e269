//! Page discovery for documentation sites
//!
//! This module contains the crawling core:
//! - HTTP fetching with per-request timeouts
//! - URL scope filtering (prefix, host, asset denylist)
//! - Sitemap-driven discovery with one level of index indirection
//! - Breadth-first link-following traversal with page and depth bounds
//! - The sitemap-first / recursive-fallback strategy orchestrator

mod fetcher;
mod orchestrator;
mod recursive;
mod scope;
mod session;
mod sitemap;

pub use fetcher::{build_http_client, fetch_page, fetch_with_timeout, PAGE_TIMEOUT, PROBE_TIMEOUT};
pub use orchestrator::{Generator, Strategy};
pub use recursive::{CrawlLimits, RecursiveCrawler, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES};
pub use scope::ScopeFilter;
pub use session::{CrawlSession, PageMap};
pub use sitemap::{parse_sitemap, SitemapCrawler, SitemapDocument};
