// src/error.rs
use std::io;

use thiserror::Error;

/// A page did not have the shape the extraction rules expect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid selector `{0}`")]
    Selector(&'static str),
    #[error("no element matches `{0}`")]
    MissingElement(&'static str),
    #[error("element has no `{0}` attribute")]
    MissingAttribute(&'static str),
    #[error("info table has {found} cells, need at least {need}")]
    MissingCell { need: usize, found: usize },
    #[error("bad url {0}")]
    BadUrl(String),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("could not parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),
}

impl ScrapeError {
    pub fn parse(url: &str, source: ParseError) -> Self {
        ScrapeError::Parse { url: s!(url), source }
    }
}
