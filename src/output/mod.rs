//! Output generation for the two llms.txt artifacts
//!
//! This module turns a crawled page map into the text artifacts:
//! - HTML to Markdown conversion for the full-content dump
//! - Page and project metadata extraction for the navigational index
//! - Formatters for `llms.txt` and `llms-full.txt`

mod convert;
mod format;
mod metadata;

pub use convert::html_to_markdown;
pub use format::{format_llms_full_txt, format_llms_txt};
pub use metadata::{
    extract_description, extract_title, page_info, project_metadata, PageInfo, ProjectMetadata,
};
