use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

use vcfscrape_model::VcfHref;

/// `<D:href>` wrapper around a path ending in `.vcf` with no `<` inside.
///
/// The match is case-sensitive: `<d:href>` or other namespace prefixes are
/// ignored.
const HREF_PATTERN: &str = r"<D:href>([^<]*\.vcf)</D:href>";

/// Extract all VCF hrefs from a cached multistatus response on disk.
///
/// The file only has to be UTF-8; it is scanned as text, never parsed as
/// XML. Missing files and invalid UTF-8 are returned as errors.
pub fn extract_vcf_urls(xml_file: impl AsRef<Path>) -> Result<Vec<VcfHref>> {
    let path = xml_file.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let urls = extract_from_str(&content);
    tracing::info!(
        path = %path.display(),
        bytes = content.len(),
        urls = urls.len(),
        "Extracted VCF hrefs"
    );

    Ok(urls)
}

/// Scan text for VCF hrefs, in document order, without deduplication.
pub fn extract_from_str(content: &str) -> Vec<VcfHref> {
    let re = Regex::new(HREF_PATTERN).expect("valid regex");
    re.captures_iter(content)
        .map(|caps| VcfHref::new(&caps[1]))
        .collect()
}
