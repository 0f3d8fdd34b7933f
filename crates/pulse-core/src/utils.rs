// SPDX-License-Identifier: Apache-2.0

//! Timestamp helpers shared by the corpus assembler and the report.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp the way GitHub does (`2024-01-31T09:15:00Z`).
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pulse_core::utils::format_timestamp;
///
/// let dt = Utc.with_ymd_and_hms(2024, 1, 31, 9, 15, 0).unwrap();
/// assert_eq!(format_timestamp(&dt), "2024-01-31T09:15:00Z");
/// ```
#[must_use]
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Whole days elapsed between `created_at` and `now`, truncated toward zero.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use pulse_core::utils::days_since;
///
/// let now = Utc::now();
/// assert_eq!(days_since(&(now - Duration::hours(47)), &now), 1);
/// assert_eq!(days_since(&now, &now), 0);
/// ```
#[must_use]
pub fn days_since(created_at: &DateTime<Utc>, now: &DateTime<Utc>) -> i64 {
    now.signed_duration_since(*created_at).num_days()
}
