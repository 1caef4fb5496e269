//! Output artifact formatting
//!
//! Produces the two text artifacts from already-extracted page data:
//! `llms.txt` (a navigational index) and `llms-full.txt` (the concatenated
//! page content under per-page headers). Neither formatter is ever invoked
//! for an empty page set; the orchestrator reports "no pages found" first.

use crate::output::metadata::PageInfo;
use std::collections::BTreeMap;

/// Formats the navigational `llms.txt` index
///
/// Layout: an H1 title, a blockquote description, a `## Documentation` list
/// of `[title](url): description` entries, and an `## Optional` trailer
/// pointing at the full dump.
pub fn format_llms_txt(title: &str, description: &str, pages: &[PageInfo]) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {}", title));
    lines.push(String::new());
    lines.push(format!("> {}", description));
    lines.push(String::new());
    lines.push("## Documentation".to_string());
    lines.push(String::new());

    for page in pages {
        let mut line = format!("- [{}]({})", page.title, page.url);
        if let Some(description) = &page.description {
            line.push_str(&format!(": {}", description));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("## Optional".to_string());
    lines.push(
        "- [Full Documentation](llms-full.txt): Comprehensive documentation in a single file."
            .to_string(),
    );

    lines.join("\n")
}

/// Formats the `llms-full.txt` content dump
///
/// Every page's Markdown goes under a `## Page: <url>` header, separated by
/// horizontal rules.
pub fn format_llms_full_txt(title: &str, content: &BTreeMap<String, String>) -> String {
    let mut lines = Vec::new();

    lines.push(format!("# {} - Full Documentation", title));
    lines.push(String::new());

    for (url, markdown) in content {
        lines.push(format!("## Page: {}", url));
        lines.push(String::new());
        lines.push(markdown.clone());
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}
