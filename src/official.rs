//! Official llms.txt artifact probe
//!
//! Before any crawling happens it is worth checking whether the target site
//! already publishes `llms.txt` / `llms-full.txt` at the base URL. The probe
//! is strictly best-effort: every failure is logged and swallowed, and a
//! missing file is a normal outcome.

use crate::crawler::{fetch_with_timeout, PROBE_TIMEOUT};
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// The standard artifact file names probed at the base URL
const OFFICIAL_FILES: [&str; 2] = ["llms.txt", "llms-full.txt"];

/// An official artifact found at the target site and saved locally
#[derive(Debug, Clone)]
pub struct OfficialArtifact {
    /// The artifact file name at the site (e.g. "llms.txt")
    pub file_name: String,

    /// The URL the artifact was fetched from
    pub url: String,

    /// Where the artifact was saved
    pub saved_to: PathBuf,
}

/// Probes `base_url` for official llms.txt files and saves any found
///
/// Each file is requested with the short probe timeout; a response counts
/// only if it is 2xx and has non-empty text content. Saved files are named
/// `<service>-official-llms.txt` and `<service>-official-llms-full.txt`
/// inside `output_dir` (created if needed).
pub async fn fetch_official_artifacts(
    client: &Client,
    base_url: &str,
    service_name: &str,
    output_dir: &Path,
) -> Vec<OfficialArtifact> {
    let base = match Url::parse(&slash_terminated(base_url)) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Cannot probe official files, invalid base URL {}: {}", base_url, e);
            return Vec::new();
        }
    };

    if let Err(e) = fs::create_dir_all(output_dir) {
        tracing::warn!(
            "Cannot create output directory {}: {}",
            output_dir.display(),
            e
        );
        return Vec::new();
    }

    let mut found = Vec::new();

    for file_name in OFFICIAL_FILES {
        let target = match base.join(file_name) {
            Ok(url) => url,
            Err(_) => continue,
        };

        tracing::info!("Checking for official {} at {}", file_name, target);

        let content = match fetch_with_timeout(client, target.as_str(), PROBE_TIMEOUT).await {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("Official {} not found: {}", file_name, e);
                continue;
            }
        };

        if content.trim().is_empty() {
            tracing::debug!("Official {} at {} is empty, ignoring", file_name, target);
            continue;
        }

        let stem = file_name.trim_end_matches(".txt");
        let save_name = format!("{}-official-{}.txt", service_name, stem);
        let save_path = output_dir.join(&save_name);

        match fs::write(&save_path, &content) {
            Ok(()) => {
                tracing::info!("Found and saved official {} to {}", file_name, save_path.display());
                found.push(OfficialArtifact {
                    file_name: file_name.to_string(),
                    url: target.to_string(),
                    saved_to: save_path,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to save official {}: {}", file_name, e);
            }
        }
    }

    found
}

/// Ensures the base URL ends with a slash so joining appends to the path
fn slash_terminated(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    }
}
