//! Llmsgen: an llms.txt generator for documentation websites
//!
//! This crate discovers the page set of a documentation site (sitemap-first,
//! with a link-following fallback) and converts it into the two standard
//! LLM-consumable artifacts: a navigational `llms.txt` index and a
//! `llms-full.txt` content dump.

pub mod crawler;
pub mod official;
pub mod output;

use thiserror::Error;

/// Main error type for llmsgen operations
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("URL {url} has no host")]
    MissingHost { url: String },

    #[error("No pages found for {url}")]
    NoPages { url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by a single page fetch
///
/// Callers that treat fetching as best-effort (sitemap probing, the
/// link-following loop) recover from these locally; only the final "no pages
/// at all" outcome of a generation request reaches the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Errors produced while interpreting a sitemap candidate
///
/// `NotXml` is the cheap pre-filter outcome (content does not even start with
/// `<`); `Malformed` means the content looked like XML but failed to parse.
/// Both are recovered locally by skipping the candidate.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Content is not XML")]
    NotXml,

    #[error("Malformed sitemap XML: {0}")]
    Malformed(#[from] roxmltree::Error),
}

/// Result type alias for llmsgen operations
pub type Result<T> = std::result::Result<T, GenError>;

// Re-export commonly used types
pub use crawler::{
    build_http_client, CrawlLimits, Generator, PageMap, RecursiveCrawler, SitemapCrawler, Strategy,
};
pub use output::{format_llms_full_txt, format_llms_txt, html_to_markdown, PageInfo};
