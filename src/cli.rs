// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::config::consts::{BASE_URL, DEFAULT_OUT_DIR, MAX_RETRIES, PAGE_COUNT};
use crate::config::options::{AppOptions, ExportFormat};
use crate::log::BarWriter;
use crate::progress::Progress;
use crate::scrape::Dropped;

/// Scrape books.toscrape.com into Books.csv, data.csv and final.csv.
#[derive(Parser, Debug)]
#[command(name = "books_scrape", version, about)]
pub struct Args {
    /// Number of listing pages to walk (1..=N).
    #[arg(long, default_value_t = PAGE_COUNT)]
    pub pages: u32,

    /// Catalogue site root.
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Directory the three tables are written to.
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// GET attempts per URL before it is skipped.
    #[arg(long, default_value_t = MAX_RETRIES)]
    pub retries: u32,

    /// Skip the politeness pauses (local mirrors only).
    #[arg(long)]
    pub no_delay: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.set_base_url(&self.base_url);
        opts.scrape.pages = self.pages;
        opts.scrape.retry.max_retries = self.retries;
        if self.no_delay {
            opts.scrape = opts.scrape.without_pauses();
        }
        opts.export.out_dir = self.out_dir;
        opts.export.format = self.format;
        opts
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let multi = MultiProgress::new();
    crate::log::init(args.verbose, BarWriter::stderr(multi.clone()));

    let opts = args.into_options();
    let mut progress = ConsoleProgress::new(multi);
    let summary = crate::runner::run_http(&opts, &mut progress)?;

    if !summary.dropped.is_empty() {
        eprintln!("{} page(s) skipped, see warnings above", summary.dropped.len());
    }
    println!("Saved {} with full dataset!", opts.export.final_path().display());
    Ok(())
}

/// One progress bar per pass on stderr.
pub struct ConsoleProgress {
    multi: MultiProgress,
    bar: Option<ProgressBar>,
    skipped: usize,
}

impl ConsoleProgress {
    pub fn new(multi: MultiProgress) -> Self {
        Self { multi, bar: None, skipped: 0 }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{prefix} [{bar:40.green/dim}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░")
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, label: &str, total: usize) {
        let bar = self.multi.add(ProgressBar::new(total as u64));
        bar.set_style(Self::style());
        bar.set_prefix(s!(label));
        self.bar = Some(bar);
        self.skipped = 0;
    }

    fn log(&mut self, msg: &str) {
        self.multi.suspend(|| eprintln!("{msg}"));
    }

    fn item_done(&mut self, _url: &str) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn item_dropped(&mut self, _dropped: &Dropped) {
        self.skipped += 1;
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{} skipped", self.skipped));
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
