use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output;
use vcfscrape_model::{ManifestEntry, Placeholder, VcfHref};

pub const DEFAULT_BASE_URL: &str = "https://carddav.fastmail.com";
pub const DEFAULT_OUTPUT_DIR: &str = "vcf_files";

/// "Download" every href by writing a placeholder file for it.
///
/// Creates `output_dir` if needed, then writes `output_dir/{filename}` for
/// each href in order. A failure on one item is logged and skipped; only a
/// failure to create the directory aborts. Returns the paths that were
/// written.
///
/// No network request is made. The placeholder records the URL that a real
/// fetch would use.
pub fn download_vcf_files(
    urls: &[VcfHref],
    base_url: &str,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let written = write_placeholders(urls, base_url, output_dir)?;
    Ok(written.into_iter().map(|e| e.path).collect())
}

/// Same as [`download_vcf_files`], keeping the href and URL for each
/// written path so a manifest can be built from the result.
pub fn write_placeholders(
    urls: &[VcfHref],
    base_url: &str,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<ManifestEntry>> {
    let dir = output_dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(urls.len());

    for href in urls {
        let placeholder = Placeholder::for_href(href, base_url);
        let filename = placeholder.filename.as_str();
        let path = dir.join(filename);

        tracing::info!(url = %placeholder.url, "Downloading {filename}...");

        match output::write_placeholder(&path, &placeholder) {
            Ok(()) => written.push(ManifestEntry {
                href: href.clone(),
                url: placeholder.url.clone(),
                path,
            }),
            Err(e) => {
                tracing::error!(file = %filename, "Failed to download {filename}: {e:#}");
            }
        }
    }

    tracing::info!(
        written = written.len(),
        skipped = urls.len() - written.len(),
        dir = %dir.display(),
        "Finished writing placeholders"
    );

    Ok(written)
}
