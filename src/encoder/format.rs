//! Fixed textual forms for time values.
//!
//! Both forms are part of the document contract and must not change with
//! chrono's own `Display` output, so neither goes through it.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_MINUTE: i128 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i128 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: i128 = 24 * MICROS_PER_HOUR;

/// Formats a time span as `H:MM:SS`, e.g. `0:00:05` for five seconds.
///
/// * A non-zero microsecond part is appended as `.ffffff` (always six digits).
/// * Spans of at least a day are prefixed with `"N day, "` or `"N days, "`.
/// * Negative spans keep only the day count negative: minus five seconds is
///   `-1 day, 23:59:55`.
/// * Precision below a microsecond is truncated.
pub fn format_duration(duration: &Duration) -> String {
    let total = i128::from(duration.num_seconds()) * MICROS_PER_SECOND
        + i128::from(duration.subsec_nanos() / 1_000);

    let days = total.div_euclid(MICROS_PER_DAY);
    let rest = total.rem_euclid(MICROS_PER_DAY);
    let hours = rest / MICROS_PER_HOUR;
    let minutes = rest % MICROS_PER_HOUR / MICROS_PER_MINUTE;
    let seconds = rest % MICROS_PER_MINUTE / MICROS_PER_SECOND;
    let micros = rest % MICROS_PER_SECOND;

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() == 1 { "" } else { "s" };
        out.push_str(&format!("{} day{}, ", days, plural));
    }
    out.push_str(&format!("{}:{:02}:{:02}", hours, minutes, seconds));
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out
}

/// Formats a UTC instant as extended ISO-8601 with an explicit offset,
/// e.g. `2005-07-14T12:30:00+00:00`.
///
/// A non-zero sub-second part is appended as `.ffffff`. Leap-second
/// representations are clamped to the last microsecond of the second.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let micros = (timestamp.nanosecond() / 1_000).min(999_999);
    let mut out = format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        timestamp.year(),
        timestamp.month(),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute(),
        timestamp.second(),
    );
    if micros != 0 {
        out.push_str(&format!(".{:06}", micros));
    }
    out.push_str("+00:00");
    out
}
