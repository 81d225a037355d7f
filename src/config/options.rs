// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::core::net::RetryPolicy;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Site root, always ending in '/'.
    pub base_url: String,
    /// Listing pages 1..=pages are fetched.
    pub pages: u32,
    pub retry: RetryPolicy,
    pub listing_pause: Duration,
    pub detail_pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            pages: PAGE_COUNT,
            retry: RetryPolicy::default(),
            listing_pause: LISTING_PAUSE,
            detail_pause: DETAIL_PAUSE,
        }
    }
}

impl ScrapeOptions {
    /// Accepts a root with or without the trailing slash.
    pub fn set_base_url(&mut self, url: &str) {
        let url = url.trim();
        self.base_url = if url.ends_with('/') { s!(url) } else { join!(url, "/") };
    }

    /// Zero both politeness pauses (retry delay is left alone).
    pub fn without_pauses(mut self) -> Self {
        self.listing_pause = Duration::ZERO;
        self.detail_pause = Duration::ZERO;
        self
    }

    /// `{base}catalogue/page-{i}.html`
    pub fn listing_url(&self, page: u32) -> String {
        format!("{}{}page-{}.html", self.base_url, CATALOGUE_PREFIX, page)
    }

    /// Root that detail-page hrefs are relative to.
    pub fn catalogue_url(&self) -> String {
        join!(&self.base_url, CATALOGUE_PREFIX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// "<out_dir>/<stem>.<ext>"
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.out_dir.join(join!(stem, ".", self.format.ext()))
    }

    pub fn books_path(&self) -> PathBuf { self.path_for(BOOKS_FILE) }
    pub fn details_path(&self) -> PathBuf { self.path_for(DETAILS_FILE) }
    pub fn final_path(&self) -> PathBuf { self.path_for(FINAL_FILE) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_layout() {
        let opts = AppOptions::default();
        assert_eq!(opts.scrape.pages, 50);
        assert_eq!(opts.scrape.listing_url(1), "https://books.toscrape.com/catalogue/page-1.html");
        assert_eq!(opts.scrape.catalogue_url(), "https://books.toscrape.com/catalogue/");
        assert_eq!(opts.export.books_path(), PathBuf::from(".").join("Books.csv"));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let mut scrape = ScrapeOptions::default();
        scrape.set_base_url("http://localhost:8000");
        assert_eq!(scrape.listing_url(7), "http://localhost:8000/catalogue/page-7.html");
    }

    #[test]
    fn format_controls_extension() {
        let export = ExportOptions { format: ExportFormat::Tsv, out_dir: PathBuf::from("out") };
        assert_eq!(export.final_path(), PathBuf::from("out").join("final.tsv"));
        assert_eq!(export.format.delim(), b'\t');
    }
}
