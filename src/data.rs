// src/data.rs
//! Row types for the three output tables. Field order is column order.

use serde::Serialize;

/// Fixed header row for a table type.
pub trait Table: Serialize {
    const HEADERS: &'static [&'static str];
}

/// One item card from a listing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListRecord {
    pub title: String,
    /// "One".."Five"
    pub rating: String,
    pub price: String,
    pub stock: String,
    pub img_link: String,
    pub book_link: String,
}

impl Table for ListRecord {
    const HEADERS: &'static [&'static str] =
        &["title", "rating", "price", "stock", "img_link", "book_link"];
}

/// One detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailRecord {
    pub category: String,
    #[serde(rename = "price_e_tax")]
    pub price_excl_tax: String,
    #[serde(rename = "price_i_tax")]
    pub price_incl_tax: String,
    pub tax: String,
    pub quantity: String,
    pub upc: String,
    pub reviews: String,
}

impl Table for DetailRecord {
    const HEADERS: &'static [&'static str] =
        &["category", "price_e_tax", "price_i_tax", "tax", "quantity", "upc", "reviews"];
}

/// Row N of the list pass joined with row N of the detail pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MergedRecord {
    pub title: String,
    pub upc: String,
    pub category: String,
    pub price_e_tax: String,
    pub price_i_tax: String,
    pub tax: String,
    pub rating: String,
    pub reviews: String,
    pub quantity: String,
    pub stock: String,
    pub book_link: String,
    pub img_link: String,
}

impl Table for MergedRecord {
    const HEADERS: &'static [&'static str] = &[
        "title", "upc", "category", "price_e_tax", "price_i_tax", "tax",
        "rating", "reviews", "quantity", "stock", "book_link", "img_link",
    ];
}

impl MergedRecord {
    pub fn from_pair(list: &ListRecord, detail: &DetailRecord) -> Self {
        Self {
            title: list.title.clone(),
            upc: detail.upc.clone(),
            category: detail.category.clone(),
            price_e_tax: detail.price_excl_tax.clone(),
            price_i_tax: detail.price_incl_tax.clone(),
            tax: detail.tax.clone(),
            rating: list.rating.clone(),
            reviews: detail.reviews.clone(),
            quantity: detail.quantity.clone(),
            stock: list.stock.clone(),
            book_link: list.book_link.clone(),
            img_link: list.img_link.clone(),
        }
    }
}
