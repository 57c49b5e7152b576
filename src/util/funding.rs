//! Funding progress and deadline arithmetic.

#[cfg(test)]
#[path = "funding_test.rs"]
mod funding_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const DAY_MS: i128 = 86_400_000;

/// Percent of `goal` raised so far, capped at 100. A non-positive goal
/// counts as no progress.
pub fn progress_percent(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 || !goal.is_finite() {
        return 0.0;
    }
    (current / goal * 100.0).min(100.0)
}

/// Progress bar fill width in percent, clamped to `[0, 100]`.
pub fn bar_width(percent: f64) -> f64 {
    if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) }
}

/// Whole days until `end_date`, rounded up. Past deadlines give zero or a
/// negative count; an unparsable date gives `None`.
pub fn days_left(end_date: &str, now_ms: i64) -> Option<i64> {
    let end = OffsetDateTime::parse(end_date.trim(), &Rfc3339).ok()?;
    let end_ms = end.unix_timestamp_nanos() / 1_000_000;
    let remaining = end_ms - i128::from(now_ms);
    let mut days = remaining.div_euclid(DAY_MS);
    if remaining.rem_euclid(DAY_MS) != 0 {
        days += 1;
    }
    i64::try_from(days).ok()
}

/// Current wall-clock time in milliseconds since the epoch.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[cfg(not(feature = "csr"))]
pub fn now_ms() -> i64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    i64::try_from(nanos).unwrap_or(i64::MAX)
}
