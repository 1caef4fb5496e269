//! Page metadata extraction
//!
//! Pulls the title and meta description out of fetched HTML for use in the
//! navigational index. Titles fall back to the page URL when a page has no
//! `<title>` element.

use crate::crawler::PageMap;
use scraper::{Html, Selector};

/// Metadata describing one page for the navigational index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Canonical page URL
    pub url: String,

    /// Page title, falling back to the URL
    pub title: String,

    /// Meta description, if the page declares one
    pub description: Option<String>,
}

/// Title and description of the whole documentation set
#[derive(Debug, Clone)]
pub struct ProjectMetadata {
    pub title: String,
    pub description: String,
}

/// Extracts the `<title>` text of a page
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Extracts the `meta[name="description"]` content of a page
pub fn extract_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .filter(|description| !description.is_empty())
}

/// Builds the index entry for one page
pub fn page_info(url: &str, html: &str) -> PageInfo {
    PageInfo {
        url: url.to_string(),
        title: extract_title(html).unwrap_or_else(|| url.to_string()),
        description: extract_description(html),
    }
}

/// Derives the project title and description from the crawled page set
///
/// The seed page (the page whose URL equals the crawl's base URL) is the
/// authority; when it is absent or carries no metadata, the service name and
/// a stock description are used instead.
pub fn project_metadata(pages: &PageMap, base_url: &str, service_name: &str) -> ProjectMetadata {
    let trimmed = base_url.trim_end_matches('/');
    let seed = pages.get(trimmed).or_else(|| pages.get(base_url));

    let title = seed
        .and_then(|html| extract_title(html))
        .unwrap_or_else(|| service_name.to_string());

    let description = seed
        .and_then(|html| extract_description(html))
        .unwrap_or_else(|| "Documentation for the project.".to_string());

    ProjectMetadata { title, description }
}
