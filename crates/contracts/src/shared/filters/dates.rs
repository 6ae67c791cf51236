use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse an ISO-8601 timestamp or plain date (YYYY-MM-DD).
///
/// Offsets are normalized to UTC, naive values are taken as UTC.
/// A plain date resolves to midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    parse_with_date_flag(raw).map(|(ts, _)| ts)
}

/// Lower bound of a date range: a plain date starts at midnight
pub fn parse_lower_bound(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp(raw)
}

/// Upper bound of a date range: a plain date covers the whole day
pub fn parse_upper_bound(raw: &str) -> Option<NaiveDateTime> {
    let (ts, date_only) = parse_with_date_flag(raw)?;
    if date_only {
        Some(ts.date().and_time(end_of_day()))
    } else {
        Some(ts)
    }
}

/// Canonical wire form used when a bound is serialized back
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

fn parse_with_date_flag(raw: &str) -> Option<(NaiveDateTime, bool)> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some((dt.naive_utc(), false));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some((ts, false));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| (d.and_time(NaiveTime::default()), true))
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or_default()
}
