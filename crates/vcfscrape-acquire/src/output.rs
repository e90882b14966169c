use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use vcfscrape_model::{DownloadManifest, Placeholder};

pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Write one placeholder file, replacing whatever is already there.
pub fn write_placeholder(path: &Path, placeholder: &Placeholder) -> Result<()> {
    let contents = placeholder.contents();
    fs::write(path, &contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote placeholder");
    Ok(())
}

/// Write `manifest.json` into the output directory and return its path.
pub fn write_manifest(manifest: &DownloadManifest, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = output_dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(MANIFEST_FILENAME);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), entries = manifest.entries.len(), "Wrote manifest");

    Ok(path)
}
