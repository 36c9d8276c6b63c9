use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Policy for durations with more than three colon-separated groups.
///
/// Feeds in the wild occasionally publish values such as `1:2:3:4`. There is
/// no agreed meaning for the extra group, so the outcome is configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationOverflow {
    /// Keep the three rightmost groups as `HH:MM:SS` and ignore the rest.
    #[default]
    Rightmost,
    /// Treat the value as unparseable.
    Reject,
}

/// Parses an episode duration using the default [`DurationOverflow`] policy.
///
/// Accepts `SS`, `MM:SS` and `HH:MM:SS`. A bare integer is seconds. Minutes
/// and seconds are not range checked (`90:00` is ninety minutes), and a
/// fractional part on the seconds group is truncated.
///
/// # Examples
///
/// ```
/// use podfeed::lenient::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("1:02:03"), Some(Duration::from_secs(3723)));
/// assert_eq!(parse_duration("02:03"), Some(Duration::from_secs(123)));
/// assert_eq!(parse_duration("90"), Some(Duration::from_secs(90)));
/// assert_eq!(parse_duration("abc"), None);
/// ```
pub fn parse_duration(raw: &str) -> Option<Duration> {
    parse_duration_with(raw, DurationOverflow::default())
}

/// Parses an episode duration with an explicit overflow policy.
pub fn parse_duration_with(raw: &str, overflow: DurationOverflow) -> Option<Duration> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let groups: Vec<&str> = trimmed.split(':').map(str::trim).collect();
    let groups = match (groups.len(), overflow) {
        (1..=3, _) => &groups[..],
        // `1:2:3:4` reads as 2:03:04, which is 7384 seconds.
        (n, DurationOverflow::Rightmost) => &groups[n - 3..],
        (_, DurationOverflow::Reject) => return None,
    };

    let (last, leading) = groups.split_last()?;
    let seconds = parse_seconds_group(last)?;

    let mut total: u64 = 0;
    for group in leading {
        total = total.checked_mul(60)?.checked_add(parse_whole_group(group)?)?;
    }
    total = total.checked_mul(60)?.checked_add(seconds)?;

    Some(Duration::from_secs(total))
}

fn parse_whole_group(group: &str) -> Option<u64> {
    if group.is_empty() || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse().ok()
}

/// The seconds group may carry a fraction (`03.500`), which is dropped.
fn parse_seconds_group(group: &str) -> Option<u64> {
    match group.split_once('.') {
        Some((whole, fraction)) => {
            if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            if whole.is_empty() && !fraction.is_empty() {
                return Some(0);
            }
            parse_whole_group(whole)
        }
        None => parse_whole_group(group),
    }
}
