//! Wall-clock helpers for message timestamps and document year labels.
//!
//! Browser builds read `Date`; SSR and tests fall back to `SystemTime`
//! and render in UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MS_PER_MINUTE: f64 = 60_000.0;
const MINUTES_PER_DAY: i64 = 24 * 60;
const MS_PER_DAY: f64 = 86_400_000.0;

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Calendar year of "now" in the viewer's zone.
#[must_use]
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        year_of(now_ms())
    }
}

/// Minutes to add to UTC to get the viewer's local time.
#[must_use]
pub fn local_offset_minutes(timestamp_ms: f64) -> i64 {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        // `getTimezoneOffset` is UTC minus local.
        #[allow(clippy::cast_possible_truncation)]
        let offset = -(date.get_timezone_offset() as i64);
        offset
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timestamp_ms;
        0
    }
}

/// Format a timestamp as `HH:MM` in the viewer's zone.
#[must_use]
pub fn format_local_clock(timestamp_ms: f64) -> String {
    format_clock(timestamp_ms, local_offset_minutes(timestamp_ms))
}

/// Format a timestamp as zero-padded `HH:MM` shifted by `offset_minutes`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_clock(timestamp_ms: f64, offset_minutes: i64) -> String {
    let minutes = (timestamp_ms / MS_PER_MINUTE).floor() as i64 + offset_minutes;
    let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", of_day / 60, of_day % 60)
}

/// Gregorian year of a UTC timestamp.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn year_of(timestamp_ms: f64) -> i32 {
    let days = (timestamp_ms / MS_PER_DAY).floor() as i64;
    // Civil-from-days over 400-year eras, years starting in March.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    year as i32
}
