// src/scrape/details.rs
use tracing::debug;

use crate::config::options::ScrapeOptions;
use crate::core::net::{Fetcher, Sleeper, Transport};
use crate::data::DetailRecord;
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::specs::detail::parse_detail_page;

use super::{Pass, accept};

/// One detail page per URL, in input order.
/// Sleeps `detail_pause` after every URL, fetched or not.
pub fn scrape_detail_pages<T: Transport, S: Sleeper>(
    fetcher: &Fetcher<T, S>,
    urls: &[String],
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<Pass<DetailRecord>, ScrapeError> {
    let mut pass = Pass::default();

    progress.begin("Scraping book details", urls.len());

    for url in urls {
        match accept(fetcher.fetch(url), url) {
            Ok(resp) => {
                let rec = parse_detail_page(&resp.body).map_err(|e| ScrapeError::parse(&resp.url, e))?;
                debug!(url = %url, upc = %rec.upc, "detail page parsed");
                pass.records.push(rec);
                progress.item_done(url);
            }
            Err(dropped) => {
                progress.item_dropped(&dropped);
                pass.dropped.push(dropped);
            }
        }

        fetcher.pause(opts.detail_pause);
    }

    progress.finish();
    Ok(pass)
}
