//! Timestamp parsing and locale-aware display.

#[cfg(test)]
#[path = "timefmt_test.rs"]
mod timefmt_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::messages::Locale;

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 and the naive `YYYY-MM-DDTHH:MM:SS[.ffffff]` form the
/// backend writes. Offsets are dropped; the wall-clock value is kept.
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(dt.date(), dt.time()));
    }
    let with_fraction = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    if let Ok(dt) = PrimitiveDateTime::parse(raw, with_fraction) {
        return Some(dt);
    }
    let plain = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(raw, plain).ok()
}

/// Render a backend timestamp for display; unparsable input is returned as-is.
pub fn format_timestamp(raw: &str, locale: Locale) -> String {
    let Some(dt) = parse_timestamp(raw) else {
        return raw.to_owned();
    };
    let formatted = match locale {
        Locale::Vi => dt.format(format_description!("[hour]:[minute]:[second] [day]/[month]/[year]")),
        Locale::En => dt.format(format_description!("[month]/[day]/[year], [hour]:[minute]:[second]")),
    };
    formatted.unwrap_or_else(|_| raw.to_owned())
}

/// Stamp used in default task names, e.g. `2026-10-19 13:45:00`.
pub fn task_stamp(now: OffsetDateTime) -> String {
    now.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// Current wall-clock time, in the local offset when it can be determined.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
