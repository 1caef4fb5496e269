//! HTML to Markdown conversion
//!
//! Pure, total conversion of fetched page HTML into Markdown suitable for
//! the full-content dump. Non-content chrome (scripts, styles, navigation,
//! footer, header, asides) is stripped before conversion and blank lines are
//! collapsed afterwards. Empty input yields empty output.

use htmd::HtmlToMarkdown;

/// Tags whose content never belongs in the converted document
const NON_CONTENT_TAGS: [&str; 6] = ["script", "style", "nav", "footer", "header", "aside"];

/// Converts page HTML to cleaned Markdown
///
/// # Example
///
/// ```
/// use llmsgen::output::html_to_markdown;
///
/// let md = html_to_markdown("<h1>Guide</h1><script>x()</script>");
/// assert!(md.contains("# Guide"));
/// assert!(!md.contains("x()"));
/// assert_eq!(html_to_markdown(""), "");
/// ```
pub fn html_to_markdown(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let converter = HtmlToMarkdown::builder()
        .skip_tags(NON_CONTENT_TAGS.to_vec())
        .build();

    let markdown = match converter.convert(html) {
        Ok(markdown) => markdown,
        Err(e) => {
            tracing::warn!("HTML to Markdown conversion failed: {}", e);
            return String::new();
        }
    };

    collapse_blank_lines(&markdown)
}

/// Drops blank lines, keeping one line per non-empty source line
fn collapse_blank_lines(markdown: &str) -> String {
    markdown
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
