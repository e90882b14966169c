use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource path taken verbatim from a `<D:href>` element.
///
/// Only paths ending in `.vcf` are ever constructed by the extractor, but the
/// type itself does not enforce that; it is just the path string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VcfHref(String);

impl VcfHref {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last path segment, used as the local filename.
    ///
    /// A path without any `/` is its own filename.
    pub fn filename(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Join onto a server base URL by plain concatenation.
    pub fn full_url(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.0)
    }
}

impl fmt::Display for VcfHref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VcfHref {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VcfHref {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for VcfHref {
    fn from(path: String) -> Self {
        Self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_last_segment() {
        let href = VcfHref::new("/addressbooks/user/default/contact123.vcf");
        assert_eq!(href.filename(), "contact123.vcf");
    }

    #[test]
    fn test_filename_without_slash() {
        assert_eq!(VcfHref::new("bare.vcf").filename(), "bare.vcf");
    }

    #[test]
    fn test_full_url_is_plain_concatenation() {
        let href = VcfHref::new("/a/b/x.vcf");
        assert_eq!(href.full_url("https://example.com"), "https://example.com/a/b/x.vcf");
        // No slash normalisation either way
        assert_eq!(href.full_url("https://example.com/"), "https://example.com//a/b/x.vcf");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let href = VcfHref::new("/a/x.vcf");
        assert_eq!(serde_json::to_string(&href).unwrap(), "\"/a/x.vcf\"");
    }
}
