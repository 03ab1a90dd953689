//! Sitemap document building and serialization
//!
//! A [`Sitemap`] holds an ordered collection of [`UrlEntry`] values
//! plus document-level metadata, serializes the whole collection to
//! XML bytes, and optionally persists the bytes to a file.

use crate::entry::UrlEntry;
use crate::error::{Error, Result};
use crate::SITEMAP_NAMESPACE;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

/// XML declaration prepended as raw bytes before the element tree
const XML_DECLARATION: &[u8] = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// A sitemap document (`<urlset>`)
///
/// Created empty, filled by append operations, then serialized with
/// [`generate`](Sitemap::generate) or written to disk with
/// [`generate_and_save`](Sitemap::generate_and_save). Entries keep
/// their insertion order in the output and duplicates are permitted.
///
/// The aggregate is a plain mutable value with no internal
/// synchronization; sharing one across threads requires an external
/// lock or single-owner discipline.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use sitemap_gen::{Sitemap, UrlEntry};
///
/// let mut sitemap = Sitemap::new();
/// sitemap.add_url(UrlEntry::new("https://example.com/", "daily", 0.5, Utc::now())?);
/// let xml = sitemap.generate()?;
/// assert!(xml.starts_with(b"<?xml"));
/// # Ok::<(), sitemap_gen::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Sitemap {
    xml_namespace: Option<String>,
    raw_extension: String,
    entries: Vec<UrlEntry>,
}

impl Sitemap {
    /// Create a new empty sitemap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `xmlns` attribute of the root element
    ///
    /// When unset, generation uses [`SITEMAP_NAMESPACE`]. A namespace
    /// set here is never overwritten by generation.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.xml_namespace = Some(namespace.into());
        self
    }

    /// Set the `xmlns` attribute on an existing sitemap
    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.xml_namespace = Some(namespace.into());
    }

    /// Get the configured namespace, if any
    ///
    /// Returns `None` until a namespace is set explicitly; the default
    /// is applied during generation without being stored.
    pub fn namespace(&self) -> Option<&str> {
        self.xml_namespace.as_deref()
    }

    /// Set trusted raw inner XML emitted verbatim inside `<urlset>`
    ///
    /// The content bypasses escaping entirely: the caller assumes
    /// responsibility for its well-formedness. Intended for extension
    /// content the fixed entry schema cannot express.
    pub fn with_raw_extension(mut self, raw: impl Into<String>) -> Self {
        self.raw_extension = raw.into();
        self
    }

    /// Set the trusted raw inner XML on an existing sitemap
    pub fn set_raw_extension(&mut self, raw: impl Into<String>) {
        self.raw_extension = raw.into();
    }

    /// Get the trusted raw inner XML (empty when unset)
    pub fn raw_extension(&self) -> &str {
        &self.raw_extension
    }

    /// Append a single URL entry
    pub fn add_url(&mut self, entry: UrlEntry) {
        self.entries.push(entry);
    }

    /// Append a sequence of URL entries, preserving their order
    pub fn add_urls(&mut self, entries: impl IntoIterator<Item = UrlEntry>) {
        self.entries.extend(entries);
    }

    /// Get the appended entries in insertion order
    pub fn urls(&self) -> &[UrlEntry] {
        &self.entries
    }

    /// Get the number of appended entries
    pub fn url_count(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the sitemap has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the sitemap to UTF-8 XML bytes
    ///
    /// Fails with [`Error::EmptySitemap`] when no entries have been
    /// appended. Read-only: repeated calls on an unchanged sitemap
    /// return byte-identical output, and the stored namespace is not
    /// modified by the defaulting step.
    pub fn generate(&self) -> Result<Vec<u8>> {
        if self.entries.is_empty() {
            return Err(Error::EmptySitemap);
        }

        let namespace = self.xml_namespace.as_deref().unwrap_or(SITEMAP_NAMESPACE);

        let mut writer = Writer::new(Vec::new());

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", namespace));
        writer
            .write_event(Event::Start(urlset))
            .map_err(|e| Error::Encode(format!("failed to write urlset element: {}", e)))?;

        if !self.raw_extension.is_empty() {
            // trusted passthrough: emitted without escaping
            writer
                .write_event(Event::Text(BytesText::from_escaped(
                    self.raw_extension.as_str(),
                )))
                .map_err(|e| Error::Encode(format!("failed to write raw extension: {}", e)))?;
        }

        for entry in &self.entries {
            write_url(&mut writer, entry)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("urlset")))
            .map_err(|e| Error::Encode(format!("failed to close urlset element: {}", e)))?;

        let mut bytes = Vec::from(XML_DECLARATION);
        bytes.extend_from_slice(&writer.into_inner());
        Ok(bytes)
    }

    /// Serialize the sitemap and write the bytes to `path`
    ///
    /// Creates or truncates the file; missing parent directories are
    /// not created. Newly created files get mode `0o644` on Unix.
    /// Generation errors propagate unchanged; filesystem errors are
    /// returned as [`Error::Write`].
    ///
    /// The write is not atomic: a failure mid-write can leave a
    /// truncated file at `path`.
    pub fn generate_and_save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.generate()?;
        write_file(path.as_ref(), &bytes)?;
        Ok(())
    }
}

/// Write one `<url>` element with its four fixed children
fn write_url(writer: &mut Writer<Vec<u8>>, entry: &UrlEntry) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new("url")))
        .map_err(|e| Error::Encode(format!("failed to write url element: {}", e)))?;

    write_text_element(writer, "loc", entry.location())?;
    write_text_element(writer, "lastmod", entry.last_modified())?;
    write_text_element(writer, "changefreq", entry.change_frequency().as_str())?;
    write_text_element(writer, "priority", entry.priority())?;

    writer
        .write_event(Event::End(BytesEnd::new("url")))
        .map_err(|e| Error::Encode(format!("failed to close url element: {}", e)))?;
    Ok(())
}

/// Write `<name>text</name>` with standard XML text escaping
fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| Error::Encode(format!("failed to write {} element: {}", name, e)))?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(|e| Error::Encode(format!("failed to write {} text: {}", name, e)))?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| Error::Encode(format!("failed to close {} element: {}", name, e)))?;
    Ok(())
}

/// Create or truncate `path` and write the full byte buffer
fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    Ok(())
}
