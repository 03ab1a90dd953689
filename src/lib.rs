//! # sitemap-gen
//!
//! A Rust library for building XML sitemaps per the
//! [sitemaps.org](https://www.sitemaps.org/protocol.html) protocol.
//!
//! Entries are validated at construction (absolute-URI location,
//! fixed change-frequency vocabulary, priority in `[0.0, 1.0]`),
//! collected into a [`Sitemap`], and serialized to UTF-8 XML bytes
//! that can also be written straight to a file.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use sitemap_gen::{Sitemap, UrlEntry};
//!
//! let mut sitemap = Sitemap::new();
//! sitemap.add_url(UrlEntry::new(
//!     "https://example.com/page-1",
//!     "daily",
//!     0.5,
//!     Utc::now(),
//! )?);
//!
//! let xml = sitemap.generate()?;
//! assert!(xml.starts_with(b"<?xml"));
//! // or: sitemap.generate_and_save("/tmp/sitemap.xml")?;
//! # Ok::<(), sitemap_gen::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod error;
pub mod frequency;
pub mod sitemap;

// Re-exports for convenience
pub use entry::UrlEntry;
pub use error::{Error, Result};
pub use frequency::ChangeFreq;
pub use sitemap::Sitemap;

/// Version of the sitemap-gen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default XML namespace for sitemap documents
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
