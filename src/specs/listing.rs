// src/specs/listing.rs
//! Listing page (`catalogue/page-N.html`): one `ListRecord` per item card.

use scraper::{ElementRef, Html};

use crate::core::html::{attr, first, last, last_class, selector, text_of};
use crate::core::sanitize::{resolve, strip_currency};
use crate::data::ListRecord;
use crate::error::ParseError;

/// Structural marker of an item card.
pub const CARD: &str = "li.col-xs-6.col-sm-4.col-md-3.col-lg-3";

/// Link roots a card's relative hrefs are resolved against.
#[derive(Clone, Debug)]
pub struct LinkBase<'a> {
    /// Site root, for cover images.
    pub site: &'a str,
    /// `{site}catalogue/`, for detail pages.
    pub catalogue: &'a str,
}

/// All cards in document order.
pub fn parse_listing_page(doc: &str, links: &LinkBase<'_>) -> Result<Vec<ListRecord>, ParseError> {
    let html = Html::parse_document(doc);
    let card_sel = selector(CARD)?;

    html.select(&card_sel)
        .map(|card| parse_card(card, links))
        .collect()
}

pub fn parse_card(card: ElementRef<'_>, links: &LinkBase<'_>) -> Result<ListRecord, ParseError> {
    Ok(ListRecord {
        title: title(card)?,
        rating: rating(card)?,
        price: price(card)?,
        stock: stock(card)?,
        img_link: img_link(card, links.site)?,
        book_link: book_link(card, links.catalogue)?,
    })
}

/// Last anchor's href, against the catalogue root.
pub fn book_link(card: ElementRef<'_>, catalogue: &str) -> Result<String, ParseError> {
    resolve(catalogue, attr(last(card, "a")?, "href")?)
}

pub fn img_link(card: ElementRef<'_>, site: &str) -> Result<String, ParseError> {
    resolve(site, attr(first(card, "img")?, "src")?)
}

/// The anchor's `title` attribute; the link text is truncated on the site.
/// An anchor without one gives an empty title, not an error.
pub fn title(card: ElementRef<'_>) -> Result<String, ParseError> {
    let anchor = last(card, "a")?;
    Ok(s!(anchor.value().attr("title").unwrap_or_default()))
}

/// Star rating is encoded as the last class: `star-rating Three`.
pub fn rating(card: ElementRef<'_>) -> Result<String, ParseError> {
    last_class(first(card, "p")?).map(String::from)
}

pub fn price(card: ElementRef<'_>) -> Result<String, ParseError> {
    Ok(strip_currency(&text_of(first(card, "p.price_color")?)))
}

pub fn stock(card: ElementRef<'_>) -> Result<String, ParseError> {
    Ok(text_of(first(card, "p.instock.availability")?).trim().to_string())
}
