//! Validated sitemap URL entries
//!
//! A [`UrlEntry`] is one `<url>` element of the document. All field
//! validation happens in the constructor; an entry is either fully
//! valid or construction fails, and it is immutable afterwards.

use crate::error::{Error, Result};
use crate::frequency::ChangeFreq;
use chrono::{DateTime, TimeZone};
use url::Url;

/// Date format used for `<lastmod>` values
const LASTMOD_FORMAT: &str = "%Y-%m-%d";

/// One `<url>` element of a sitemap
///
/// Fields are private and exposed through read-only accessors;
/// construction via [`UrlEntry::new`] is the only way to obtain one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    location: String,
    last_modified: String,
    change_frequency: ChangeFreq,
    priority: String,
}

impl UrlEntry {
    /// Create a new validated URL entry
    ///
    /// Checks run in order and the first failure wins:
    ///
    /// 1. `location` must parse as an absolute URI
    ///    ([`Error::InvalidLocation`]);
    /// 2. `change_frequency` must be a case-sensitive match for one of
    ///    the seven protocol tokens ([`Error::InvalidFrequency`]);
    /// 3. `priority` must lie in `0.0..=1.0`, NaN excluded
    ///    ([`Error::InvalidPriority`]).
    ///
    /// `last_modified` is truncated to its calendar date in the
    /// instant's own timezone and stored as `YYYY-MM-DD`; the
    /// time-of-day and offset are discarded and cannot be recovered.
    /// `priority` is stored formatted to one fractional digit using
    /// round-half-to-even (`0.55` becomes `"0.6"`, `0.25` becomes
    /// `"0.2"`).
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Utc;
    /// use sitemap_gen::UrlEntry;
    ///
    /// let entry = UrlEntry::new("https://example.com/", "daily", 0.5, Utc::now())?;
    /// assert_eq!(entry.priority(), "0.5");
    /// # Ok::<(), sitemap_gen::Error>(())
    /// ```
    pub fn new<Tz: TimeZone>(
        location: impl Into<String>,
        change_frequency: &str,
        priority: f64,
        last_modified: DateTime<Tz>,
    ) -> Result<Self> {
        let location = location.into();
        if Url::parse(&location).is_err() {
            return Err(Error::InvalidLocation(location));
        }

        let change_frequency: ChangeFreq = change_frequency.parse()?;

        if !(0.0..=1.0).contains(&priority) {
            return Err(Error::InvalidPriority(priority));
        }

        Ok(Self {
            location,
            last_modified: last_modified.date_naive().format(LASTMOD_FORMAT).to_string(),
            change_frequency,
            priority: format!("{:.1}", priority),
        })
    }

    /// Get the location (the `<loc>` value)
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Get the formatted `YYYY-MM-DD` last-modification date
    pub fn last_modified(&self) -> &str {
        &self.last_modified
    }

    /// Get the change frequency
    pub fn change_frequency(&self) -> ChangeFreq {
        self.change_frequency
    }

    /// Get the priority formatted to one fractional digit
    pub fn priority(&self) -> &str {
        &self.priority
    }
}
