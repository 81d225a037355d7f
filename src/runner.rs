// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::AppOptions,
    core::net::{Fetcher, Sleeper, Transport, http_fetcher},
    file::write_table,
    merge::merge,
    progress::Progress,
    scrape::{Dropped, scrape_detail_pages, scrape_listing_pages},
    error::ScrapeError,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub books: usize,
    pub details: usize,
    pub merged: usize,
    /// Pages and detail URLs that produced no rows.
    pub dropped: Vec<Dropped>,
    pub files_written: Vec<PathBuf>,
}

/// Full pipeline: listing pass → Books, detail pass over the links just
/// scraped → data, positional merge → final.
pub fn run<T: Transport, S: Sleeper>(
    opts: &AppOptions,
    fetcher: &Fetcher<T, S>,
    progress: &mut dyn Progress,
) -> Result<RunSummary, ScrapeError> {
    let export = &opts.export;
    let mut files_written = Vec::with_capacity(3);

    let books = scrape_listing_pages(fetcher, &opts.scrape, progress)?;
    files_written.push(write_table(&export.books_path(), &books.records, export.format)?);

    let links: Vec<String> = books.records.iter().map(|b| b.book_link.clone()).collect();
    let details = scrape_detail_pages(fetcher, &links, &opts.scrape, progress)?;
    files_written.push(write_table(&export.details_path(), &details.records, export.format)?);

    let merged = merge(&books.records, &details.records);
    if !merged.is_aligned() {
        progress.log(&format!(
            "{} listing rows vs {} detail rows; final table truncated to {}",
            merged.list_len, merged.detail_len, merged.rows.len()
        ));
    }
    files_written.push(write_table(&export.final_path(), &merged.rows, export.format)?);

    let mut dropped = books.dropped;
    dropped.extend(details.dropped);

    info!(
        books = books.records.len(),
        details = details.records.len(),
        merged = merged.rows.len(),
        dropped = dropped.len(),
        "pipeline finished"
    );

    Ok(RunSummary {
        books: books.records.len(),
        details: details.records.len(),
        merged: merged.rows.len(),
        dropped,
        files_written,
    })
}

/// `run` against the live site with real sleeps.
pub fn run_http(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary, ScrapeError> {
    let fetcher = http_fetcher(opts.scrape.retry)?;
    run(opts, &fetcher, progress)
}
