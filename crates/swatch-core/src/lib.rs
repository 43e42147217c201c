//! Swatch Internet Time.
//!
//! A decimal time anchored to UTC+1 (Biel, Switzerland): each day divides
//! into 1000 ".beats" of 86.4 seconds. This crate derives beat counts from
//! wall-clock timestamps and formats them, optionally interleaved with
//! ordinary strftime calendar directives in a single layout string.
//!
//! Internet Time never observes daylight saving; the reference zone is a
//! fixed one-hour offset, not CET.

mod algorithm;
mod format;
mod internet_time;

pub use algorithm::{reference_zone, Algorithm, SECONDS_PER_BEAT};
pub use format::{Precision, BEATS, CENTI_BEATS, DECI_BEATS, MICRO_BEATS, MILLI_BEATS};
pub use internet_time::InternetTime;
