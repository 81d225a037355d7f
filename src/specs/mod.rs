// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read exactly one kind of catalogue page and turn it
//! into records. Everything here is pure: a document string goes in, records
//! (or a `ParseError`) come out. No networking, no sleeping, no files.
//!
//! Every field has its own small rule function, so a markup change on the
//! site shows up as one failing rule and one failing test.
//!
//! ## Call chain
//! ```text
//! runner → scrape::{listing_pass, detail_pass} → Fetcher::fetch
//!                                              ↘ specs::<page>::parse_*
//! ```
//!
//! ## Conventions
//! - A missing element is a `ParseError`, never a silently empty field.
//! - Fixtures for offline tests live in `tests/fixtures/`.
pub mod detail;
pub mod listing;
