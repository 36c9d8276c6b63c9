//! Lenient timestamp parsing.
//!
//! Strict RFC 2822 and RFC 3339 are tried first. When both fail the input is
//! normalized and matched against a fixed list of layouts observed in real
//! feeds:
//!
//! - leading weekday names are dropped, whatever their spelling or accuracy
//!   (`Tues, 10 Jun 2003`, `Thursday 10 Jun 2003`)
//! - commas anywhere are treated as whitespace (`Jun 10, 2003`)
//! - full or misspelled month names are reduced to their abbreviation
//!   (`June`, `Sept`)
//! - two-digit years after a month name are widened (`< 50` → 20xx)
//! - dotted clock times become colon separated (`04.00.00`)
//! - timezone abbreviations (`EST`, `CEST`, `GMT+1`) become numeric offsets
//! - a missing timezone is read as UTC
//! - a bare date is read as midnight UTC

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

static DOTTED_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\.(\d{2})(?:\.(\d{2}))?$").expect("valid regex")
});

static PREFIXED_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:GMT|UTC|UT)([+-])(\d{1,2})(?::?(\d{2}))?$").expect("valid regex")
});

const ZONED_LAYOUTS: &[&str] = &[
    "%d %b %Y %H:%M:%S %z",
    "%d %b %Y %H:%M %z",
    "%b %d %Y %H:%M:%S %z",
    "%b %d %Y %H:%M %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M %z",
];

const NAIVE_LAYOUTS: &[&str] = &[
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%b %d %Y %H:%M:%S",
    "%b %d %Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_LAYOUTS: &[&str] = &["%d %b %Y", "%b %d %Y", "%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

const WEEKDAYS: &[&str] = &[
    "mon", "tue", "wed", "thu", "fri", "sat", "sun",
];

const MONTHS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ZONES: &[(&str, &str)] = &[
    ("Z", "+0000"),
    ("UT", "+0000"),
    ("UTC", "+0000"),
    ("GMT", "+0000"),
    ("WET", "+0000"),
    ("WEST", "+0100"),
    ("BST", "+0100"),
    ("CET", "+0100"),
    ("MET", "+0100"),
    ("CEST", "+0200"),
    ("MEST", "+0200"),
    ("EET", "+0200"),
    ("EEST", "+0300"),
    ("MSK", "+0300"),
    ("IST", "+0530"),
    ("AWST", "+0800"),
    ("JST", "+0900"),
    ("KST", "+0900"),
    ("ACST", "+0930"),
    ("AEST", "+1000"),
    ("AEDT", "+1100"),
    ("NZST", "+1200"),
    ("NZDT", "+1300"),
    ("HST", "-1000"),
    ("AKST", "-0900"),
    ("AKDT", "-0800"),
    ("PST", "-0800"),
    ("PDT", "-0700"),
    ("MST", "-0700"),
    ("MDT", "-0600"),
    ("CST", "-0600"),
    ("CDT", "-0500"),
    ("EST", "-0500"),
    ("EDT", "-0400"),
    ("AST", "-0400"),
    ("ADT", "-0300"),
    ("NST", "-0330"),
];

/// Parses a feed timestamp, returning `None` when no known layout matches.
///
/// # Examples
///
/// ```
/// use podfeed::lenient::parse_date;
///
/// assert!(parse_date("Tue, 10 Jun 2003 04:00:00 GMT").is_some());
/// assert!(parse_date("2003-06-10T04:00:00Z").is_some());
/// assert!(parse_date("Tues, 10 June 03 04:00:00 EST").is_some());
/// assert!(parse_date("yesterday").is_none());
/// ```
pub fn parse_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed);
    }

    let normalized = normalize(trimmed);
    parse_normalized(&normalized)
}

fn parse_normalized(normalized: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(normalized) {
        return Some(parsed);
    }

    for layout in ZONED_LAYOUTS {
        if let Ok(parsed) = DateTime::parse_from_str(normalized, layout) {
            return Some(parsed);
        }
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(normalized, layout) {
            return Some(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }

    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(normalized, layout) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight).fixed_offset());
        }
    }

    None
}

fn normalize(raw: &str) -> String {
    let spaced = raw.replace(',', " ");
    let mut tokens: Vec<String> = spaced.split_whitespace().map(str::to_string).collect();

    if tokens.first().is_some_and(|t| is_weekday(t)) {
        tokens.remove(0);
    }

    let last = tokens.len().saturating_sub(1);
    for (idx, token) in tokens.iter_mut().enumerate() {
        if let Some(month) = month_abbreviation(token) {
            *token = month.to_string();
        } else if let Some(caps) = DOTTED_TIME.captures(token) {
            *token = match caps.get(3) {
                Some(seconds) => format!("{}:{}:{}", &caps[1], &caps[2], seconds.as_str()),
                None => format!("{}:{}", &caps[1], &caps[2]),
            };
        } else if idx == last && idx > 0 {
            if let Some(offset) = zone_offset(token) {
                *token = offset;
            }
        }
    }

    // `10 Jun 03`: RFC 2822 section 4.3 maps 00-49 to 20xx and 50-99 to 19xx
    if tokens.len() >= 3
        && is_digits(&tokens[0], 1..=2)
        && MONTHS.contains(&tokens[1].as_str())
        && is_digits(&tokens[2], 2..=2)
    {
        let century = if tokens[2].as_str() < "50" { "20" } else { "19" };
        tokens[2] = format!("{century}{}", tokens[2]);
    }

    let joined = tokens.join(" ");
    iso_zulu(&joined).unwrap_or(joined)
}

fn is_digits(token: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit())
}

/// `2003-06-10T04:00Z` is not RFC 3339 (no seconds), so swap the `Z` for an
/// offset the layout table understands.
fn iso_zulu(joined: &str) -> Option<String> {
    let stem = joined
        .strip_suffix('Z')
        .or_else(|| joined.strip_suffix('z'))?;
    if stem.contains('T') && stem.ends_with(|c: char| c.is_ascii_digit()) {
        Some(format!("{stem}+0000"))
    } else {
        None
    }
}

fn is_weekday(token: &str) -> bool {
    let word = token.trim_end_matches('.').to_ascii_lowercase();
    word.len() >= 3
        && word.bytes().all(|b| b.is_ascii_alphabetic())
        && WEEKDAYS.iter().any(|day| word.starts_with(day))
}

fn month_abbreviation(token: &str) -> Option<&'static str> {
    let word = token.trim_end_matches('.');
    if word.len() < 3 || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let prefix = word[..3].to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|month| month.eq_ignore_ascii_case(&prefix))
        .copied()
}

fn zone_offset(token: &str) -> Option<String> {
    if let Some((_, offset)) = ZONES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
    {
        return Some((*offset).to_string());
    }

    let caps = PREFIXED_OFFSET.captures(token)?;
    let hours: u32 = caps[2].parse().ok()?;
    let minutes: u32 = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;
    Some(format!("{}{:02}{:02}", &caps[1], hours, minutes))
}
