//! Date-expression resolution for tool inputs.
//!
//! The agent supplies dates the way a user phrases them. Three grammars are
//! accepted:
//!
//! * the literal `"now"` (any casing) — the current instant, `end` only;
//! * an ISO-8601 date or date-time, with an optional trailing `Z` taken as
//!   UTC; naive values resolve as UTC;
//! * `"<N> days ago"` — `start` only. The leading whitespace-delimited
//!   token must parse as an integer by itself: `"3 days ago"` is three days
//!   before now, while the fused `"10daysago"` is malformed (no suffix
//!   stripping). Everything after the leading integer is ignored, so
//!   `"3 day ago"` and `"3 d ago"` resolve identically.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

/// A date expression that matches none of the accepted grammars.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed date expression {expr:?}: {reason}")]
pub struct MalformedDateError {
    pub expr: String,
    pub reason: &'static str,
}

impl MalformedDateError {
    fn new(expr: &str, reason: &'static str) -> Self {
        Self {
            expr: expr.to_string(),
            reason,
        }
    }
}

/// Resolves an `end` expression to an absolute instant.
///
/// `"now"` (case-insensitive) resolves to the supplied current instant;
/// anything else must be ISO-8601.
pub fn resolve_end(expr: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, MalformedDateError> {
    if expr.eq_ignore_ascii_case("now") {
        return Ok(now);
    }
    parse_iso(expr)
}

/// Resolves a `start` expression to an absolute instant.
///
/// Expressions containing `"ago"` (case-insensitive) are day-count
/// relative; anything else must be ISO-8601.
pub fn resolve_start(expr: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, MalformedDateError> {
    if expr.to_ascii_lowercase().contains("ago") {
        let leading = expr
            .split_whitespace()
            .next()
            .ok_or_else(|| MalformedDateError::new(expr, "empty relative expression"))?;
        let days: i64 = leading.parse().map_err(|_| {
            MalformedDateError::new(expr, "leading token of an \"ago\" expression must be an integer day count")
        })?;
        return Ok(now - Duration::days(days));
    }
    parse_iso(expr)
}

fn parse_iso(expr: &str) -> Result<DateTime<Utc>, MalformedDateError> {
    // Normalize a trailing Z to an explicit offset before parsing.
    let normalized = match expr.strip_suffix('Z').or_else(|| expr.strip_suffix('z')) {
        Some(stripped) => format!("{stripped}+00:00"),
        None => expr.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(MalformedDateError::new(expr, "not an ISO-8601 date or date-time"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn end_now_resolves_to_supplied_instant_any_casing() {
        let now = fixed_now();
        for expr in ["now", "NOW", "Now", "nOw"] {
            assert_eq!(resolve_end(expr, now).unwrap(), now);
        }
    }

    #[test]
    fn end_iso_with_z_is_midnight_utc() {
        let resolved = resolve_end("2024-01-05T00:00:00Z", fixed_now()).unwrap();
        assert_eq!(
            resolved,
            Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn end_with_explicit_offset_converts_to_utc() {
        let resolved = resolve_end("2024-01-05T01:00:00+01:00", fixed_now()).unwrap();
        assert_eq!(
            resolved,
            Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn naive_datetime_and_bare_date_resolve_as_utc() {
        let resolved = resolve_end("2024-01-05T09:30:00", fixed_now()).unwrap();
        assert_eq!(
            resolved,
            Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap()
        );

        let resolved = resolve_end("2024-01-05", fixed_now()).unwrap();
        assert_eq!(
            resolved,
            Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn end_gibberish_is_malformed() {
        let err = resolve_end("not-a-date", fixed_now()).unwrap_err();
        assert_eq!(err.expr, "not-a-date");
    }

    #[test]
    fn start_days_ago_subtracts_exact_days() {
        let now = fixed_now();
        let resolved = resolve_start("3 days ago", now).unwrap();
        assert_eq!(resolved, now - Duration::days(3));

        // Unit spelling after the integer is ignored.
        assert_eq!(resolve_start("3 day ago", now).unwrap(), resolved);
        assert_eq!(resolve_start("3 d ago", now).unwrap(), resolved);
    }

    #[test]
    fn start_ago_is_case_insensitive() {
        let now = fixed_now();
        assert_eq!(
            resolve_start("1 DAYS AGO", now).unwrap(),
            now - Duration::days(1)
        );
    }

    #[test]
    fn fused_days_ago_is_malformed() {
        // "10daysago" has "ago" but its leading token is not an integer.
        assert!(resolve_start("10daysago", fixed_now()).is_err());
    }

    #[test]
    fn non_numeric_leading_token_is_malformed() {
        assert!(resolve_start("ten days ago", fixed_now()).is_err());
    }

    #[test]
    fn start_accepts_iso_like_end() {
        let resolved = resolve_start("2024-01-05T00:00:00Z", fixed_now()).unwrap();
        assert_eq!(
            resolved,
            Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn start_after_end_is_not_this_components_problem() {
        // Purely syntactic: an inverted range resolves without complaint.
        let now = fixed_now();
        let start = resolve_start("2024-02-01", now).unwrap();
        let end = resolve_end("2024-01-01", now).unwrap();
        assert!(start > end);
    }
}
