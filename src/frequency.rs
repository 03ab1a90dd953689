//! Change frequency vocabulary
//!
//! The sitemaps.org protocol fixes the set of valid `<changefreq>`
//! values. This module provides that vocabulary as an enum with
//! case-sensitive string parsing.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The seven valid `<changefreq>` tokens, in protocol order
pub const VALID_FREQUENCIES: [&str; 7] = [
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

/// How often the content behind a URL is expected to change
///
/// Parsing from a string is a case-sensitive exact match against the
/// lowercase protocol tokens: `"daily"` parses, `"Daily"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFreq {
    /// Changes on every access
    Always,
    /// Changes roughly every hour
    Hourly,
    /// Changes roughly every day
    Daily,
    /// Changes roughly every week
    Weekly,
    /// Changes roughly every month
    Monthly,
    /// Changes roughly every year
    Yearly,
    /// Archived content that never changes
    Never,
}

impl ChangeFreq {
    /// Get the protocol token for this frequency
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl FromStr for ChangeFreq {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "always" => Ok(ChangeFreq::Always),
            "hourly" => Ok(ChangeFreq::Hourly),
            "daily" => Ok(ChangeFreq::Daily),
            "weekly" => Ok(ChangeFreq::Weekly),
            "monthly" => Ok(ChangeFreq::Monthly),
            "yearly" => Ok(ChangeFreq::Yearly),
            "never" => Ok(ChangeFreq::Never),
            _ => Err(Error::InvalidFrequency(s.to_string())),
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_valid_tokens() {
        for token in VALID_FREQUENCIES {
            let freq: ChangeFreq = token.parse().unwrap();
            assert_eq!(freq.as_str(), token);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "Daily".parse::<ChangeFreq>(),
            Err(Error::InvalidFrequency(s)) if s == "Daily"
        ));
        assert!("ALWAYS".parse::<ChangeFreq>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert!("".parse::<ChangeFreq>().is_err());
        assert!("sometimes".parse::<ChangeFreq>().is_err());
        assert!("daily ".parse::<ChangeFreq>().is_err());
    }

    #[test]
    fn test_display_matches_token() {
        assert_eq!(ChangeFreq::Weekly.to_string(), "weekly");
        assert_eq!(ChangeFreq::Never.to_string(), "never");
    }
}
