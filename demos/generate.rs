//! Builds a small sitemap and writes it to /tmp/sitemap.xml.
//!
//! Run with: `cargo run --example generate`

use chrono::Utc;
use sitemap_gen::{Sitemap, UrlEntry};

fn main() {
    let links = [
        "https://example.com/page-1",
        "https://example.com/page-2",
        "https://example.com/page-3",
    ];

    let mut sitemap = Sitemap::new();
    for link in links {
        match UrlEntry::new(link, "daily", 0.5, Utc::now()) {
            Ok(entry) => sitemap.add_url(entry),
            Err(err) => {
                eprintln!("{}", err);
                break;
            }
        }
    }

    match sitemap.generate_and_save("/tmp/sitemap.xml") {
        Ok(()) => println!("wrote /tmp/sitemap.xml ({} URLs)", sitemap.url_count()),
        Err(err) => eprintln!("{}", err),
    }
}
