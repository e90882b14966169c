pub mod download;
pub mod output;

pub use download::{download_vcf_files, write_placeholders};
