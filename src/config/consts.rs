// src/config/consts.rs
use std::time::Duration;

// Net config
pub const BASE_URL: &str = "https://books.toscrape.com/";
pub const CATALOGUE_PREFIX: &str = "catalogue/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Retry
pub const MAX_RETRIES: u32 = 3;
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

// Scrape
pub const PAGE_COUNT: u32 = 50;
pub const LISTING_PAUSE: Duration = Duration::from_secs(1); // be polite
pub const DETAIL_PAUSE: Duration = Duration::from_millis(500);

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const BOOKS_FILE: &str = "Books";
pub const DETAILS_FILE: &str = "data";
pub const FINAL_FILE: &str = "final";
