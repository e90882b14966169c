use crate::href::VcfHref;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Record of one placeholder run, written as `manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadManifest {
    pub source: SourceInfo,
    pub entries: Vec<ManifestEntry>,
}

/// Where the hrefs came from and when the placeholders were generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Path of the cached multistatus response.
    pub input: String,
    pub base_url: String,
    pub generated_at: String,
}

/// One placeholder that was written successfully.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestEntry {
    pub href: VcfHref,
    pub url: String,
    pub path: PathBuf,
}

impl DownloadManifest {
    pub fn new(input: &str, base_url: &str, entries: Vec<ManifestEntry>) -> Self {
        Self {
            source: SourceInfo {
                input: input.to_string(),
                base_url: base_url.to_string(),
                generated_at: chrono::Utc::now().to_rfc3339(),
            },
            entries,
        }
    }

    /// Paths of all written placeholders, in write order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(href: &str, dir: &str) -> ManifestEntry {
        let href = VcfHref::new(href);
        ManifestEntry {
            url: href.full_url("https://h"),
            path: PathBuf::from(dir).join(href.filename()),
            href,
        }
    }

    #[test]
    fn test_paths_preserve_order() {
        let manifest = DownloadManifest::new(
            "response.xml",
            "https://h",
            vec![entry("/a/x.vcf", "out"), entry("/a/z.vcf", "out")],
        );
        assert_eq!(
            manifest.paths(),
            vec![PathBuf::from("out/x.vcf"), PathBuf::from("out/z.vcf")]
        );
        assert_eq!(manifest.source.input, "response.xml");
    }

    #[test]
    fn test_manifest_json_shape() {
        let manifest = DownloadManifest::new("in.xml", "https://h", vec![entry("/a/x.vcf", "out")]);

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["source"]["base_url"], "https://h");
        assert_eq!(value["entries"][0]["href"], "/a/x.vcf");
        assert_eq!(value["entries"][0]["url"], "https://h/a/x.vcf");
        assert!(value["source"]["generated_at"].as_str().unwrap().contains('T'));
    }
}
