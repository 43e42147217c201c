//! Beat derivation from wall-clock timestamps.

use chrono::{DateTime, FixedOffset, Timelike, Utc};

/// One beat is 1/1000 of a mean solar day.
pub const SECONDS_PER_BEAT: f64 = 86.4;

/// Beat values carry at most six fractional digits.
pub(crate) const MAX_BEAT_PRECISION: u32 = 6;

const SECONDS_PER_DAY: i64 = 86_400;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_HOUR: i64 = 3_600 * NANOS_PER_SEC;
const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * NANOS_PER_SEC;
const NANOS_PER_BEAT: i64 = NANOS_PER_DAY / 1000;

/// The fixed UTC+1 reference zone for Internet Time.
///
/// Not CET: Swatch time never observes daylight saving, so a named
/// European zone would drift by an hour every summer.
pub fn reference_zone() -> FixedOffset {
    FixedOffset::east_opt(3600).expect("one hour east is a valid offset")
}

/// How beats are derived from a timestamp.
///
/// Both variants agree on the whole-beat value for any instant; they
/// differ only in fractional resolution and at the exact day boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Beats from the hour/minute/second of the timestamp in the UTC+1
    /// reference zone. Sub-second resolution is ignored.
    #[default]
    SecondsBased,
    /// Beats from the nanosecond offset since the Unix epoch, shifted by
    /// the one-hour reference offset and reduced modulo one day.
    NanosecondBased,
}

impl Algorithm {
    /// Compute the fractional beat count for `timestamp`, truncated down
    /// to six decimal digits.
    ///
    /// Truncation (never round-to-nearest) guarantees beat boundaries only
    /// advance forward as time advances, and keeps the whole-beat value
    /// consistent with the precise value under further truncation.
    pub fn compute_beats(self, timestamp: DateTime<FixedOffset>) -> f64 {
        let raw = match self {
            Algorithm::SecondsBased => seconds_based(timestamp),
            Algorithm::NanosecondBased => nanosecond_based(timestamp),
        };
        round_down(raw, MAX_BEAT_PRECISION)
    }
}

fn seconds_based(timestamp: DateTime<FixedOffset>) -> f64 {
    let local = timestamp.with_timezone(&reference_zone());
    let day_seconds = local.hour() * 3600 + local.minute() * 60 + local.second();
    f64::from(day_seconds) / SECONDS_PER_BEAT
}

fn nanosecond_based(timestamp: DateTime<FixedOffset>) -> f64 {
    // timestamp() is seconds since the epoch in UTC regardless of the
    // value's offset. Reducing modulo one day before widening to
    // nanoseconds keeps everything in i64 range for any date.
    let utc = timestamp.with_timezone(&Utc);
    let day_nanos = utc.timestamp().rem_euclid(SECONDS_PER_DAY) * NANOS_PER_SEC
        + i64::from(utc.timestamp_subsec_nanos());
    let mut since_reference_midnight = (day_nanos + NANOS_PER_HOUR) % NANOS_PER_DAY;
    if since_reference_midnight == 0 {
        // Exactly at reference midnight: report the end of the previous
        // day's cycle (beat 1000) rather than beat 0 as if no time had
        // elapsed. Intentional rule, not a defect.
        since_reference_midnight = NANOS_PER_DAY;
    }
    since_reference_midnight as f64 / NANOS_PER_BEAT as f64
}

/// Truncate `value` down to `digits` decimal digits, toward negative
/// infinity. Shared by the calculator and the token formatter.
pub(crate) fn round_down(value: f64, digits: u32) -> f64 {
    let ratio = 10f64.powi(digits as i32);
    (value * ratio).floor() / ratio
}
