//! Locale- and timezone-aware date formatting.
//!
//! The pipeline treats date formatting as a capability: anything that can
//! turn an instant into presentation text. `LocaleDateFormatter` is the
//! built-in implementation covering the common locale tags and fixed UTC
//! offsets; callers with richer needs (full CLDR data, IANA zones) supply
//! their own `DateFormatter`.

use chrono::{DateTime, FixedOffset, Utc};
use tracing::debug;

/// Capability for rendering instants as presentation text.
///
/// Implementations must be pure and total: same instant, same string, no
/// failures.
pub trait DateFormatter: Send + Sync {
    /// Format an instant for presentation.
    fn format(&self, instant: &DateTime<Utc>) -> String;
}

/// Chrono-backed `DateFormatter` parameterized by locale tag and timezone.
///
/// The locale tag selects a short date/time pattern; the timezone accepts
/// `UTC`, `GMT`, or a fixed offset like `UTC+05:30` or `-07:00`.
/// Unrecognized identifiers degrade to UTC rather than failing.
#[derive(Debug, Clone)]
pub struct LocaleDateFormatter {
    pattern: &'static str,
    offset: FixedOffset,
}

impl LocaleDateFormatter {
    /// Create a formatter for the given locale tag and timezone identifier.
    pub fn new(locale: &str, timezone: &str) -> Self {
        Self {
            pattern: locale_pattern(locale),
            offset: parse_offset(timezone),
        }
    }
}

impl Default for LocaleDateFormatter {
    fn default() -> Self {
        Self::new("en-US", "UTC")
    }
}

impl DateFormatter for LocaleDateFormatter {
    fn format(&self, instant: &DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.offset)
            .format(self.pattern)
            .to_string()
    }
}

/// Short date/time pattern for a locale tag.
///
/// Mirrors the `dateStyle: short, timeStyle: short` shapes of the common
/// tags; everything unrecognized gets an unambiguous ISO-like form.
fn locale_pattern(locale: &str) -> &'static str {
    match locale {
        tag if tag.starts_with("en-US") => "%-m/%-d/%y, %-I:%M %p",
        tag if tag.starts_with("en") => "%d/%m/%Y, %H:%M",
        tag if tag.starts_with("de") => "%d.%m.%y, %H:%M",
        tag if tag.starts_with("fr") || tag.starts_with("es") || tag.starts_with("it") => {
            "%d/%m/%Y %H:%M"
        }
        tag if tag.starts_with("ja") || tag.starts_with("zh") => "%Y/%m/%d %H:%M",
        _ => "%Y-%m-%d %H:%M",
    }
}

/// Parse a timezone identifier into a fixed offset. Falls back to UTC.
fn parse_offset(timezone: &str) -> FixedOffset {
    let utc = FixedOffset::east_opt(0).expect("zero offset is valid");

    let rest = timezone
        .strip_prefix("UTC")
        .or_else(|| timezone.strip_prefix("GMT"))
        .unwrap_or(timezone);
    if rest.is_empty() {
        return utc;
    }

    let (sign, digits) = match rest.split_at_checked(1) {
        Some(("+", digits)) => (1i32, digits),
        Some(("-", digits)) => (-1i32, digits),
        _ => {
            debug!(timezone, "unrecognized timezone identifier, using UTC");
            return utc;
        }
    };

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok(), m.parse::<i32>().ok()),
        None => (digits.parse::<i32>().ok(), Some(0)),
    };
    match (hours, minutes) {
        (Some(hours), Some(minutes)) if hours <= 14 && minutes < 60 => {
            FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).unwrap_or(utc)
        }
        _ => {
            debug!(timezone, "unparseable timezone offset, using UTC");
            utc
        }
    }
}
