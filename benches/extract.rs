// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use books_scrape::specs::{detail, listing};

const LISTING: &str = include_str!("../tests/fixtures/listing_page.html");
const DETAIL: &str = include_str!("../tests/fixtures/detail_page.html");

fn bench_extract(c: &mut Criterion) {
    let links = listing::LinkBase {
        site: "https://books.toscrape.com/",
        catalogue: "https://books.toscrape.com/catalogue/",
    };

    c.bench_function("listing_page", |b| {
        b.iter(|| {
            let rows = listing::parse_listing_page(black_box(LISTING), &links).unwrap_or_default();
            black_box(rows.len())
        })
    });

    c.bench_function("detail_page", |b| {
        b.iter(|| black_box(detail::parse_detail_page(black_box(DETAIL)).is_ok()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
