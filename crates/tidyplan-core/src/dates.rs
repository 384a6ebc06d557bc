//! Date canonicalization for loosely formatted input.

use chrono::NaiveDate;

/// Accepted input date patterns, tried in order. The first element of each
/// pair is the human-readable label advertised in generation prompts, the
/// second the chrono format string the normalizer parses with.
pub const DATE_PATTERNS: &[(&str, &str)] = &[
    ("yyyy-MM-dd", "%Y-%m-%d"),
    ("yyyy/MM/dd", "%Y/%m/%d"),
    ("yyyy.MM.dd", "%Y.%m.%d"),
    ("yyyyMMdd", "%Y%m%d"),
];

/// Canonical output format for all normalized dates.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonicalize a date string to `yyyy-MM-dd`.
///
/// Tries each pattern in [`DATE_PATTERNS`] and reformats the first
/// successful parse. Blank or unrecognized input yields `None`, which
/// callers treat as "unspecified", never as a failure.
pub fn normalize_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_PATTERNS.iter().find_map(|(_, format)| {
        NaiveDate::parse_from_str(trimmed, format)
            .ok()
            .map(|date| date.format(CANONICAL_DATE_FORMAT).to_string())
    })
}
