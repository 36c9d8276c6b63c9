/// Parses a non-negative integer, tolerating surrounding whitespace and a
/// leading `+`.
pub fn parse_u64(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// [`parse_u64`] narrowed to `u32`; values that do not fit are absent.
pub fn parse_u32(raw: &str) -> Option<u32> {
    parse_u64(raw).and_then(|n| u32::try_from(n).ok())
}

/// Parses a finite decimal number.
pub fn parse_f64(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Interprets the flag spellings used by iTunes-style boolean elements.
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
