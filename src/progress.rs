// src/progress.rs
use crate::scrape::Dropped;

/// Lightweight progress reporting used by the scrape passes.
/// The CLI implements this to draw a progress line; tests use `NullProgress`.
pub trait Progress {
    /// Called at the start of a pass with its label and item count.
    fn begin(&mut self, _label: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page/URL fetched and parsed.
    fn item_done(&mut self, _url: &str) {}

    /// One page/URL skipped after a failed fetch.
    fn item_dropped(&mut self, _dropped: &Dropped) {}

    /// Called at the end of a pass.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
