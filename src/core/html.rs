// src/core/html.rs
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

use crate::error::ParseError;

pub fn selector(css: &'static str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::Selector(css))
}

/// All text nodes under `el`, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn first<'a>(scope: ElementRef<'a>, css: &'static str) -> Result<ElementRef<'a>, ParseError> {
    let sel = selector(css)?;
    scope.select(&sel).next().ok_or(ParseError::MissingElement(css))
}

pub fn last<'a>(scope: ElementRef<'a>, css: &'static str) -> Result<ElementRef<'a>, ParseError> {
    let sel = selector(css)?;
    scope.select(&sel).last().ok_or(ParseError::MissingElement(css))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &'static str) -> Result<&'a str, ParseError> {
    el.value().attr(name).ok_or(ParseError::MissingAttribute(name))
}

/// Last token of the `class` attribute, in source order.
pub fn last_class<'a>(el: ElementRef<'a>) -> Result<&'a str, ParseError> {
    attr(el, "class")?
        .split_whitespace()
        .last()
        .ok_or(ParseError::MissingAttribute("class"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn last_class_keeps_source_order() {
        let doc = Html::parse_fragment(r#"<p class="star-rating Three">x</p>"#);
        let p = first(doc.root_element(), "p").unwrap();
        assert_eq!(last_class(p).unwrap(), "Three");
    }

    #[test]
    fn missing_things_are_named() {
        let doc = Html::parse_fragment(r#"<div><a>no href</a></div>"#);
        let root = doc.root_element();
        assert_eq!(first(root, "img").unwrap_err(), ParseError::MissingElement("img"));
        let a = last(root, "a").unwrap();
        assert_eq!(attr(a, "href").unwrap_err(), ParseError::MissingAttribute("href"));
        assert_eq!(text_of(a), "no href");
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert_eq!(selector("p[").unwrap_err(), ParseError::Selector("p["));
    }
}
