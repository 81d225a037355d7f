// src/scrape/mod.rs
//! The two fetch-and-extract passes.
//!
//! Both passes share one drop policy: a page that cannot be fetched (retries
//! exhausted) or that answers with an HTTP error status produces no rows and
//! the pass moves on. Drops are returned next to the records so callers can
//! report them; they never change which rows are produced.

mod books;
mod details;

use std::fmt;

use tracing::warn;

use crate::core::net::{FetchOutcome, Response};

pub use books::scrape_listing_pages;
pub use details::scrape_detail_pages;

/// Records of one pass plus whatever was skipped on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pass<T> {
    pub records: Vec<T>,
    pub dropped: Vec<Dropped>,
}

impl<T> Default for Pass<T> {
    fn default() -> Self {
        Self { records: Vec::new(), dropped: Vec::new() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dropped {
    pub url: String,
    pub reason: DropReason,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// Transport failed on every attempt.
    Unreachable { attempts: u32 },
    /// Server answered, but with 4xx/5xx.
    HttpStatus(u16),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Unreachable { attempts } => write!(f, "unreachable after {attempts} attempts"),
            DropReason::HttpStatus(code) => write!(f, "HTTP {code}"),
        }
    }
}

/// Usable response, or the reason this URL gets skipped.
fn accept(outcome: FetchOutcome, url: &str) -> Result<Response, Dropped> {
    let reason = match outcome {
        FetchOutcome::Fetched(resp) if resp.is_success() => return Ok(resp),
        FetchOutcome::Fetched(resp) => DropReason::HttpStatus(resp.status),
        FetchOutcome::Absent { attempts, .. } => DropReason::Unreachable { attempts },
    };
    warn!("skipping {url}: {reason}");
    Err(Dropped { url: s!(url), reason })
}
