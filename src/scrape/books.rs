// src/scrape/books.rs
use tracing::debug;

use crate::config::options::ScrapeOptions;
use crate::core::net::{Fetcher, Sleeper, Transport};
use crate::data::ListRecord;
use crate::error::ScrapeError;
use crate::progress::Progress;
use crate::specs::listing::{LinkBase, parse_listing_page};

use super::{Pass, accept};

/// Listing pages 1..=`opts.pages`, in order; cards in document order.
/// Sleeps `listing_pause` after every page, fetched or not.
pub fn scrape_listing_pages<T: Transport, S: Sleeper>(
    fetcher: &Fetcher<T, S>,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<Pass<ListRecord>, ScrapeError> {
    let catalogue = opts.catalogue_url();
    let links = LinkBase { site: &opts.base_url, catalogue: &catalogue };
    let mut pass = Pass::default();

    progress.begin("Scraping book list", opts.pages as usize);

    for page in 1..=opts.pages {
        let url = opts.listing_url(page);

        match accept(fetcher.fetch(&url), &url) {
            Ok(resp) => {
                let mut rows = parse_listing_page(&resp.body, &links)
                    .map_err(|e| ScrapeError::parse(&resp.url, e))?;
                debug!(page, cards = rows.len(), "listing page parsed");
                pass.records.append(&mut rows);
                progress.item_done(&url);
            }
            Err(dropped) => {
                progress.item_dropped(&dropped);
                pass.dropped.push(dropped);
            }
        }

        fetcher.pause(opts.listing_pause);
    }

    progress.finish();
    Ok(pass)
}
