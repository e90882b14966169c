use anyhow::Result;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use vcfscrape_model::VcfHref;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no VCF hrefs found in input")]
    NoHrefs,

    #[error("filename '{filename}' is shared by {count} hrefs; later placeholders overwrite earlier ones")]
    DuplicateFilename { filename: String, count: usize },

    #[error("href '{0}' has an empty filename stem")]
    EmptyStem(String),

    #[error("href '{0}' has a filename with reserved or control characters")]
    UnsafeFilename(String),

    #[error("base URL '{0}' is not an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("base URL '{0}' ends with '/'; joined URLs will contain '//'")]
    TrailingSlash(String),
}

/// Extract hrefs from `xml_file` and validate them against `base_url`.
///
/// Read errors propagate; validation findings are returned, not raised.
pub fn validate(xml_file: &str, base_url: &str) -> Result<Vec<ValidationError>> {
    let urls = vcfscrape_extract::extract_vcf_urls(xml_file)?;
    let errors = validate_all(&urls, base_url);
    if errors.is_empty() {
        tracing::info!(urls = urls.len(), "Hrefs are valid");
    }
    Ok(errors)
}

/// Run every check and log each finding as a warning.
pub fn validate_all(urls: &[VcfHref], base_url: &str) -> Vec<ValidationError> {
    let mut errors = validate_base_url(base_url);
    errors.extend(validate_hrefs(urls));

    for e in &errors {
        tracing::warn!("{e}");
    }

    errors
}

/// Check the extracted hrefs for filenames that would collide or be unusable.
pub fn validate_hrefs(urls: &[VcfHref]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if urls.is_empty() {
        errors.push(ValidationError::NoHrefs);
        return errors;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for href in urls {
        *counts.entry(href.filename()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    for href in urls {
        let filename = href.filename();

        if filename == ".vcf" {
            errors.push(ValidationError::EmptyStem(href.to_string()));
        }
        if filename.chars().any(is_reserved_char) {
            errors.push(ValidationError::UnsafeFilename(href.to_string()));
        }

        let count = counts[filename];
        if count > 1 && reported.insert(filename) {
            errors.push(ValidationError::DuplicateFilename {
                filename: filename.to_string(),
                count,
            });
        }
    }

    errors
}

/// Check that the base URL can be concatenated with absolute href paths.
pub fn validate_base_url(base_url: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ValidationError::InvalidBaseUrl(base_url.to_string()));
    }
    if base_url.ends_with('/') {
        errors.push(ValidationError::TrailingSlash(base_url.to_string()));
    }

    errors
}

fn is_reserved_char(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '\\' | '|' | '?' | '*') || c.is_control()
}
