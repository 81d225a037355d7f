// src/log.rs
use std::io::{self, Write};

use indicatif::MultiProgress;
use tracing_subscriber::{EnvFilter, fmt, fmt::MakeWriter};

const DEFAULT_FILTER: &str = "books_scrape=info";
const VERBOSE_FILTER: &str = "books_scrape=debug";

/// Subscriber writing through `writer`. `RUST_LOG` wins over `verbose` when set.
/// Calling twice is harmless; the second call is ignored.
pub fn init<W>(verbose: bool, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .try_init();
}

/// Writer that prints each log event with the progress bars hidden, so a
/// warning never lands in the middle of a bar line.
#[derive(Clone)]
pub struct BarWriter<M = fn() -> io::Stderr> {
    multi: MultiProgress,
    inner: M,
}

impl BarWriter {
    /// Events go to stderr.
    pub fn stderr(multi: MultiProgress) -> Self {
        Self { multi, inner: io::stderr }
    }
}

impl<M> BarWriter<M> {
    pub fn new(multi: MultiProgress, inner: M) -> Self {
        Self { multi, inner }
    }
}

impl<'a, M> MakeWriter<'a> for BarWriter<M>
where
    M: MakeWriter<'a> + 'a,
{
    type Writer = EventBuf<'a, M>;

    fn make_writer(&'a self) -> Self::Writer {
        EventBuf { owner: self, buf: Vec::new() }
    }
}

/// One formatted event. Written out as a whole when dropped.
pub struct EventBuf<'a, M: MakeWriter<'a>> {
    owner: &'a BarWriter<M>,
    buf: Vec<u8>,
}

impl<'a, M: MakeWriter<'a>> Write for EventBuf<'a, M> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a, M: MakeWriter<'a>> Drop for EventBuf<'a, M> {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let owner = self.owner;
        let buf = std::mem::take(&mut self.buf);
        owner.multi.suspend(|| {
            let mut out = owner.inner.make_writer();
            let _ = out.write_all(&buf);
            let _ = out.flush();
        });
    }
}
