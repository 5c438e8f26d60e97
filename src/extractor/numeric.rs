//! Numeric and time literal grammar shared by the extractor and the
//! override parser.

/// Parse a number that may carry thousands separators, a trailing percent
/// sign, or stray punctuation picked up from the paste. Returns `None` for
/// anything that is not a usable numeric literal.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_end_matches('%').replace(',', "");
    let cleaned = cleaned.trim_matches(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'));
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Parse a non-negative integer count, tolerating separators.
pub fn parse_count(raw: &str) -> Option<u32> {
    let value = parse_number(raw)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

/// Parse an average-survived value. A literal containing a colon is read as
/// `minutes:seconds`; a bare number is taken as seconds already.
pub fn parse_duration_secs(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    match raw.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: f64 = minutes.trim().parse().ok()?;
            let seconds: f64 = seconds.trim().parse().ok()?;
            Some(minutes * 60.0 + seconds)
        }
        None => parse_number(raw),
    }
}
