//! Feed datetime handling on top of `chrono`.
//!
//! Provides a `FeedDate` wrapper around `DateTime<FixedOffset>`, optimized
//! for feed generation use cases (RSS, Atom, JSON Feed).
//!
//! # Features
//!
//! - Accepts RFC 3339 timestamps, bare dates and offset-less timestamps
//! - Comparison by instant, so `2024-06-15T02:00:00+02:00` equals
//!   `2024-06-15T00:00:00Z`
//! - RFC 2822 and RFC 3339 formatting for feeds
//!
//! # Examples
//!
//! ```ignore
//! let dt = FeedDate::parse("2024-06-15").unwrap();
//! let dt = FeedDate::parse("2024-06-15T14:30:45Z").unwrap();
//!
//! // Format for RSS
//! assert_eq!(dt.to_rfc2822(), "Sat, 15 Jun 2024 14:30:45 +0000");
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Publication instant of a feed item.
///
/// Ordering and equality compare the underlying instant, not the textual
/// representation it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeedDate(DateTime<FixedOffset>);

impl FeedDate {
    /// Parse from RFC 3339 (`2024-06-15T14:30:45Z`, offset variants
    /// included), `YYYY-MM-DDTHH:MM:SS` (UTC assumed) or `YYYY-MM-DD`
    /// (midnight UTC).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Some(Self(naive.and_utc().fixed_offset()));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(Self(naive.and_utc().fixed_offset()));
        }

        None
    }

    /// 1970-01-01T00:00:00Z, used as the `updated` fallback for feeds
    /// without any items.
    pub fn epoch() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }

    /// The underlying instant, as the type `atom_syndication` expects.
    pub fn datetime(self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Format for RSS `pubDate`/`lastBuildDate` elements.
    pub fn to_rfc2822(self) -> String {
        self.0.to_rfc2822()
    }

    /// Format for Atom `updated` and JSON Feed `date_published` fields.
    ///
    /// Returns `YYYY-MM-DDTHH:MM:SSZ` for UTC instants, numeric offsets
    /// otherwise.
    pub fn to_rfc3339(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl From<DateTime<FixedOffset>> for FeedDate {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }
}
