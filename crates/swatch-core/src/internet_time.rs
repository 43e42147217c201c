//! The Internet Time value object.

use core::fmt;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::algorithm::{reference_zone, Algorithm};
use crate::format;

/// A wall-clock instant paired with a beat-derivation algorithm.
///
/// The timestamp is normalized into the fixed UTC+1 reference zone at
/// construction, never at read time. Values are immutable once built, so
/// they can be shared across threads freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InternetTime {
    timestamp: DateTime<FixedOffset>,
    algorithm: Algorithm,
}

impl InternetTime {
    /// The current instant with the default seconds-based algorithm.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Wrap an existing timestamp, normalizing it into the UTC+1
    /// reference zone. Any source zone or offset is accepted.
    pub fn from_datetime<Tz: TimeZone>(timestamp: DateTime<Tz>) -> Self {
        Self {
            timestamp: timestamp.with_timezone(&reference_zone()),
            algorithm: Algorithm::default(),
        }
    }

    /// Select the beat-derivation algorithm.
    pub fn with_algorithm(self, algorithm: Algorithm) -> Self {
        Self { algorithm, ..self }
    }

    /// The wrapped timestamp, already in the UTC+1 reference zone.
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// The configured beat-derivation algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whole beats: [`precise_beats`](Self::precise_beats) truncated to
    /// its integer part. 0-999 for any instant, except that the
    /// nanosecond algorithm reports 1000 at exact reference midnight.
    pub fn beats(&self) -> u16 {
        self.precise_beats().floor() as u16
    }

    /// Fractional beats, truncated down to six decimal digits.
    pub fn precise_beats(&self) -> f64 {
        self.algorithm.compute_beats(self.timestamp)
    }

    /// Render `layout`, substituting beat tokens and strftime calendar
    /// directives in place.
    ///
    /// The five beat tokens ([`BEATS`](crate::BEATS) through
    /// [`MICRO_BEATS`](crate::MICRO_BEATS)) may appear anywhere in the
    /// layout, interleaved with calendar directives; each resolves
    /// independently and input order is preserved. A layout with no beat
    /// tokens, or no calendar directives, is fine.
    pub fn format(&self, layout: &str) -> String {
        format::render_layout(self, layout)
    }
}

/// The canonical short form: whole beats, e.g. `@91`.
impl fmt::Display for InternetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(format::BEATS))
    }
}
