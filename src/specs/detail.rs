// src/specs/detail.rs
//! Detail page (`catalogue/<slug>/index.html`): one `DetailRecord`.
//!
//! The product information table is read by position:
//!
//! | idx | row               |
//! |-----|-------------------|
//! | 0   | UPC               |
//! | 1   | Product Type      |
//! | 2   | Price (excl. tax) |
//! | 3   | Price (incl. tax) |
//! | 4   | Tax               |
//! | 5   | Availability      |
//! | 6   | Number of reviews |

use scraper::Html;

use crate::core::html::{first, last, selector, text_of};
use crate::core::sanitize::strip_currency;
use crate::data::DetailRecord;
use crate::error::ParseError;

pub const UPC: usize = 0;
pub const PRICE_EXCL_TAX: usize = 2;
pub const PRICE_INCL_TAX: usize = 3;
pub const TAX: usize = 4;
pub const AVAILABILITY: usize = 5;
pub const REVIEWS: usize = 6;

pub fn parse_detail_page(doc: &str) -> Result<DetailRecord, ParseError> {
    let html = Html::parse_document(doc);
    let category = category(&html)?;
    let cells = info_cells(&html)?;

    Ok(DetailRecord {
        category,
        price_excl_tax: strip_currency(cell(&cells, PRICE_EXCL_TAX)?),
        price_incl_tax: strip_currency(cell(&cells, PRICE_INCL_TAX)?),
        tax: strip_currency(cell(&cells, TAX)?),
        quantity: s!(cell(&cells, AVAILABILITY)?),
        upc: s!(cell(&cells, UPC)?),
        reviews: s!(cell(&cells, REVIEWS)?),
    })
}

/// Text of the last breadcrumb link (the active crumb has no link).
pub fn category(html: &Html) -> Result<String, ParseError> {
    let crumbs = first(html.root_element(), "ul.breadcrumb")?;
    Ok(text_of(last(crumbs, "a")?))
}

/// `<td>` texts of the first table, document order.
pub fn info_cells(html: &Html) -> Result<Vec<String>, ParseError> {
    let table = first(html.root_element(), "table")?;
    let td = selector("td")?;
    Ok(table.select(&td).map(text_of).collect())
}

pub fn cell(cells: &[String], idx: usize) -> Result<&str, ParseError> {
    cells
        .get(idx)
        .map(String::as_str)
        .ok_or(ParseError::MissingCell { need: idx + 1, found: cells.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/detail_page.html");

    #[test]
    fn info_table_fields() {
        let rec = parse_detail_page(FIXTURE).unwrap();
        assert_eq!(rec.upc, "a897fe39b1053632");
        assert_eq!(rec.price_excl_tax, "51.77");
        assert_eq!(rec.price_incl_tax, "51.77");
        assert_eq!(rec.tax, "0.00");
        assert_eq!(rec.quantity, "In stock (22 available)");
        assert_eq!(rec.reviews, "0");
    }

    #[test]
    fn category_is_last_breadcrumb_link() {
        let html = Html::parse_document(FIXTURE);
        assert_eq!(category(&html).unwrap(), "Poetry");
    }

    #[test]
    fn cells_in_document_order() {
        let html = Html::parse_document(FIXTURE);
        let cells = info_cells(&html).unwrap();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[1], "Books");
    }

    #[test]
    fn short_table_aborts() {
        let doc = r#"<ul class="breadcrumb"><li><a href="/">Home</a></li></ul>
            <table><tr><th>UPC</th><td>abc</td></tr></table>"#;
        assert_eq!(
            parse_detail_page(doc).unwrap_err(),
            ParseError::MissingCell { need: 3, found: 1 }
        );
    }

    #[test]
    fn missing_breadcrumb_aborts() {
        let doc = "<table><tr><td>abc</td></tr></table>";
        assert_eq!(
            parse_detail_page(doc).unwrap_err(),
            ParseError::MissingElement("ul.breadcrumb")
        );
    }
}
