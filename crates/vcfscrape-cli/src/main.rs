use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use vcfscrape_acquire::download::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use vcfscrape_model::{DownloadManifest, VcfHref};

const DEFAULT_INPUT: &str = "response.xml";

#[derive(Parser)]
#[command(name = "vcfscrape")]
#[command(about = "Scrape VCF hrefs from a cached CardDAV listing and stage placeholder files")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// List the VCF hrefs found in a cached PROPFIND response
    Extract {
        /// Cached multistatus XML response
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,

        /// How many hrefs to print before the total
        #[arg(short = 'n', long, default_value_t = 5)]
        preview: usize,
    },

    /// Write a placeholder file for every VCF href (no network access)
    Download {
        /// Cached multistatus XML response
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,

        /// Server base URL the hrefs are relative to
        #[arg(short, long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Directory to write placeholder files into
        #[arg(short = 'O', long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: String,

        /// Also write manifest.json describing the written placeholders
        #[arg(long)]
        manifest: bool,
    },

    /// Check extracted hrefs and the base URL for problems
    Validate {
        /// Cached multistatus XML response
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: String,

        /// Server base URL the hrefs are relative to
        #[arg(short, long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-02-14 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Extract { input, preview } => {
            let urls = vcfscrape_extract::extract_vcf_urls(&input)?;
            write_listing(&mut io::stdout().lock(), &urls, preview)?;
        }
        Commands::Download {
            input,
            base_url,
            output_dir,
            manifest,
        } => {
            let urls = vcfscrape_extract::extract_vcf_urls(&input)?;
            tracing::info!(input = %input, urls = urls.len(), "Found {} VCF files", urls.len());

            // Findings are advisory here; every href is still attempted
            vcfscrape_validate::validate_all(&urls, &base_url);

            let entries = vcfscrape_acquire::write_placeholders(&urls, &base_url, &output_dir)?;
            tracing::info!(
                written = entries.len(),
                dir = %output_dir,
                "Downloaded {} files to {output_dir} directory",
                entries.len()
            );

            if manifest {
                let manifest = DownloadManifest::new(&input, &base_url, entries);
                vcfscrape_acquire::output::write_manifest(&manifest, &output_dir)?;
            }
        }
        Commands::Validate { input, base_url } => {
            tracing::info!(input = %input, base_url = %base_url, "Validating");
            let errors = vcfscrape_validate::validate(&input, &base_url)?;
            if !errors.is_empty() {
                anyhow::bail!("{} validation problems found", errors.len());
            }
        }
    }

    Ok(())
}

/// Print the href count, the first `preview` hrefs numbered from 1, and the
/// total when anything was found.
fn write_listing(out: &mut impl Write, urls: &[VcfHref], preview: usize) -> io::Result<()> {
    writeln!(out, "Found {} VCF files", urls.len())?;

    for (i, url) in urls.iter().take(preview).enumerate() {
        writeln!(out, "{}: {url}", i + 1)?;
    }

    if !urls.is_empty() {
        writeln!(out, "...")?;
        writeln!(out, "Total: {} files", urls.len())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(urls: &[VcfHref], preview: usize) -> String {
        let mut out = Vec::new();
        write_listing(&mut out, urls, preview).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn hrefs(n: usize) -> Vec<VcfHref> {
        (1..=n).map(|i| VcfHref::new(format!("/a/c{i}.vcf"))).collect()
    }

    #[test]
    fn test_listing_empty() {
        assert_eq!(listing(&[], 5), "Found 0 VCF files\n");
    }

    #[test]
    fn test_listing_shorter_than_preview() {
        assert_eq!(
            listing(&hrefs(2), 5),
            "Found 2 VCF files\n1: /a/c1.vcf\n2: /a/c2.vcf\n...\nTotal: 2 files\n"
        );
    }

    #[test]
    fn test_listing_truncated_at_preview() {
        let text = listing(&hrefs(7), 5);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Found 7 VCF files");
        assert_eq!(lines[1], "1: /a/c1.vcf");
        assert_eq!(lines[5], "5: /a/c5.vcf");
        assert!(!text.contains("c6.vcf"));
        assert_eq!(lines[6], "...");
        assert_eq!(lines[7], "Total: 7 files");
    }
}
