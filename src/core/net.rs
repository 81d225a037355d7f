// src/core/net.rs
//! Blocking HTTP GET with bounded, fixed-delay retries.
//!
//! Only transport failures (connect, timeout, DNS, body read) are retried.
//! Any HTTP status, 4xx/5xx included, is a completed fetch at this layer;
//! callers decide what an error status means for them.

use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::consts::{MAX_RETRIES, REQUEST_TIMEOUT, RETRY_DELAY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            delay: RETRY_DELAY,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// A completed GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Final URL after redirects.
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl Response {
    /// 2xx/3xx. Anything else is treated as "no page" by the scrape passes.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// Anything that can perform one GET.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Response, TransportError>;
}

/// Blocking wait between requests. Swapped out in tests.
pub trait Sleeper {
    fn sleep(&self, d: Duration);
}

pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, d: Duration) {
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

/// Production transport: `reqwest` blocking client, default headers, no cookies.
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpClient {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();
        let body = resp.text()?;
        Ok(Response { url: final_url, status, body })
    }
}

/// Result of a fetch after retries.
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(Response),
    /// Every attempt hit a transport error (or no attempt was allowed).
    Absent {
        attempts: u32,
        last_error: Option<TransportError>,
    },
}

impl FetchOutcome {
    pub fn response(self) -> Option<Response> {
        match self {
            FetchOutcome::Fetched(r) => Some(r),
            FetchOutcome::Absent { .. } => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FetchOutcome::Absent { .. })
    }
}

pub struct Fetcher<T, S> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T: Transport, S: Sleeper> Fetcher<T, S> {
    pub fn new(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self { transport, sleeper, policy }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Politeness pause through the same injected sleeper.
    pub fn pause(&self, d: Duration) {
        self.sleeper.sleep(d);
    }

    /// Up to `max_retries` attempts; `delay` between failed attempts.
    /// Never returns an error: exhaustion is `FetchOutcome::Absent`.
    pub fn fetch(&self, url: &str) -> FetchOutcome {
        let retries = self.policy.max_retries;
        let mut last_error = None;

        for attempt in 1..=retries {
            debug!(url, attempt, "GET");
            match self.transport.get(url) {
                Ok(resp) => return FetchOutcome::Fetched(resp),
                Err(e) => {
                    warn!("Error: {e} (attempt {attempt}/{retries}) {url}");
                    last_error = Some(e);
                    // No wait after the final attempt: R attempts cost R-1 delays.
                    // The old script also slept after its last failure.
                    if attempt < retries {
                        self.sleeper.sleep(self.policy.delay);
                    }
                }
            }
        }

        FetchOutcome::Absent { attempts: retries, last_error }
    }
}

/// Production fetcher with real network and real sleeps.
pub fn http_fetcher(policy: RetryPolicy) -> Result<Fetcher<HttpClient, ThreadSleeper>, reqwest::Error> {
    Ok(Fetcher::new(HttpClient::new(policy.timeout)?, ThreadSleeper, policy))
}
