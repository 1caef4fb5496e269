//! Llmsgen main entry point
//!
//! Command-line interface for generating llms.txt artifacts from a
//! documentation website.

use anyhow::Context;
use clap::Parser;
use llmsgen::crawler::{CrawlLimits, Generator, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES};
use llmsgen::official::fetch_official_artifacts;
use llmsgen::output::{
    format_llms_full_txt, format_llms_txt, html_to_markdown, page_info, project_metadata,
};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Llmsgen: generate llms.txt and llms-full.txt from documentation sites
///
/// Discovers the page set of a documentation website (sitemap-first, with a
/// link-following fallback), converts each page to Markdown, and writes the
/// navigational index and full-content dump.
#[derive(Parser, Debug)]
#[command(name = "llmsgen")]
#[command(version)]
#[command(about = "Generate llms.txt artifacts from a documentation website", long_about = None)]
struct Cli {
    /// Root URL of the documentation (e.g. https://example.com/docs)
    #[arg(value_name = "URL")]
    url: String,

    /// Service name used in output file names (derived from the URL if omitted)
    #[arg(long)]
    name: Option<String>,

    /// Version string embedded in the output file names
    #[arg(long, default_value = "1.0.0", value_name = "VERSION")]
    version_tag: String,

    /// Directory the artifacts are written to
    #[arg(long, default_value = "outputs", value_name = "DIR")]
    out: PathBuf,

    /// Maximum number of pages fetched by the link-following fallback
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Maximum link depth followed by the link-following fallback
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Skip the probe for official llms.txt files at the target site
    #[arg(long)]
    skip_official: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let service_name = cli
        .name
        .clone()
        .unwrap_or_else(|| derive_service_name(&cli.url));

    tracing::info!("Starting generation for {}", cli.url);

    let generator = Generator::with_limits(CrawlLimits {
        max_pages: cli.max_pages,
        max_depth: cli.max_depth,
    })?;

    if !cli.skip_official {
        let found =
            fetch_official_artifacts(generator.client(), &cli.url, &service_name, &cli.out).await;
        for artifact in &found {
            println!(
                "Found official {} at {}, saved to {}",
                artifact.file_name,
                artifact.url,
                artifact.saved_to.display()
            );
        }
        if found.is_empty() {
            tracing::info!("No official llms.txt found at standard locations");
        }
    }

    let (pages, strategy) = generator.generate(&cli.url).await?;
    tracing::info!("Crawled {} pages via {} strategy", pages.len(), strategy);

    // Convert pages and collect index metadata
    let mut index_entries = Vec::with_capacity(pages.len());
    let mut content_map = BTreeMap::new();
    for (url, html) in &pages {
        index_entries.push(page_info(url, html));
        content_map.insert(url.clone(), html_to_markdown(html));
    }

    let project = project_metadata(&pages, &cli.url, &service_name);

    let llms_txt = format_llms_txt(&project.title, &project.description, &index_entries);
    let llms_full_txt = format_llms_full_txt(&project.title, &content_map);

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("failed to create output directory {}", cli.out.display()))?;

    let llms_name = format!("{}-llms-v{}.txt", service_name, cli.version_tag);
    let llms_full_name = format!("{}-llms-full-v{}.txt", service_name, cli.version_tag);

    let llms_path = cli.out.join(&llms_name);
    let llms_full_path = cli.out.join(&llms_full_name);

    std::fs::write(&llms_path, llms_txt)
        .with_context(|| format!("failed to write {}", llms_path.display()))?;
    std::fs::write(&llms_full_path, llms_full_txt)
        .with_context(|| format!("failed to write {}", llms_full_path.display()))?;

    println!(
        "Successfully generated {} and {} in {} ({} pages, {} strategy)",
        llms_name,
        llms_full_name,
        cli.out.display(),
        pages.len(),
        strategy
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("llmsgen=info,warn"),
            1 => EnvFilter::new("llmsgen=debug,info"),
            2 => EnvFilter::new("llmsgen=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Derives a service name from the documentation URL
///
/// The last non-empty path segment wins; a domain-root URL falls back to the
/// host with dots replaced by dashes.
fn derive_service_name(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return "docs".to_string();
    };

    let last_segment = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last().map(str::to_string));

    match last_segment {
        Some(segment) => segment,
        None => parsed
            .host_str()
            .map(|host| host.replace('.', "-"))
            .unwrap_or_else(|| "docs".to_string()),
    }
}
