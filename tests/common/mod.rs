// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use books_scrape::core::net::{Response, Sleeper, Transport, TransportError};

pub const BASE: &str = "http://books.test/";
pub const LISTING_FIXTURE: &str = include_str!("../fixtures/listing_page.html");
pub const DETAIL_FIXTURE: &str = include_str!("../fixtures/detail_page.html");

/// In-memory site. Each URL answers from a script of outcomes; the last
/// outcome repeats once the script runs out. Unknown URLs answer 404.
#[derive(Default)]
pub struct ScriptedSite {
    routes: HashMap<String, RefCell<VecDeque<Result<Response, TransportError>>>>,
    pub hits: RefCell<Vec<String>>,
}

impl ScriptedSite {
    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.routes.insert(url.to_string(), RefCell::new(VecDeque::from([ok(url, body)])));
        self
    }

    pub fn script(mut self, url: &str, outcomes: Vec<Result<Response, TransportError>>) -> Self {
        self.routes.insert(url.to_string(), RefCell::new(outcomes.into()));
        self
    }

    pub fn hits_for(&self, url: &str) -> usize {
        self.hits.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Transport for ScriptedSite {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        self.hits.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(script) => {
                let mut q = script.borrow_mut();
                if q.len() > 1 { q.pop_front().unwrap() } else { q.front().cloned().unwrap() }
            }
            None => Ok(Response { url: url.to_string(), status: 404, body: String::new() }),
        }
    }
}

pub fn ok(url: &str, body: &str) -> Result<Response, TransportError> {
    Ok(Response { url: url.to_string(), status: 200, body: body.to_string() })
}

pub fn refused() -> Result<Response, TransportError> {
    Err(TransportError::Connect("connection refused".into()))
}

#[derive(Default)]
pub struct RecordingSleeper(pub RefCell<Vec<Duration>>);

impl RecordingSleeper {
    pub fn count_of(&self, d: Duration) -> usize {
        self.0.borrow().iter().filter(|x| **x == d).count()
    }
    pub fn total(&self) -> Duration {
        self.0.borrow().iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, d: Duration) {
        self.0.borrow_mut().push(d);
    }
}

/// Detail page with its own UPC and category, same layout as the fixture.
pub fn detail_html(upc: &str, category: &str) -> String {
    DETAIL_FIXTURE
        .replace("a897fe39b1053632", upc)
        .replace(">Poetry<", &format!(">{category}<"))
}

/// Two listing pages (fixture + a one-card page) and all four detail pages.
pub fn catalogue_site() -> ScriptedSite {
    let page2 = r#"<html><body><ol class="row">
        <li class="col-xs-6 col-sm-4 col-md-3 col-lg-3"><article class="product_pod">
          <a href="sharp-objects_997/index.html"><img src="../media/cache/32/51/3251cf3a3412f53f339e42cac2134093.jpg"></a>
          <p class="star-rating Four"></p>
          <h3><a href="sharp-objects_997/index.html" title="Sharp Objects">Sharp Objects</a></h3>
          <p class="price_color">£47.82</p>
          <p class="instock availability"> In stock </p>
        </article></li></ol></body></html>"#;

    ScriptedSite::default()
        .page(&format!("{BASE}catalogue/page-1.html"), LISTING_FIXTURE)
        .page(&format!("{BASE}catalogue/page-2.html"), page2)
        .page(&format!("{BASE}catalogue/a-light-in-the-attic_1000/index.html"), &detail_html("a897fe39b1053632", "Poetry"))
        .page(&format!("{BASE}catalogue/tipping-the-velvet_999/index.html"), &detail_html("90fa61229261140a", "Historical Fiction"))
        .page(&format!("{BASE}catalogue/soumission_998/index.html"), &detail_html("6957f44c3847a760", "Fiction"))
        .page(&format!("{BASE}catalogue/sharp-objects_997/index.html"), &detail_html("e00eb4fd7b871a48", "Mystery"))
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("books_scrape_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
