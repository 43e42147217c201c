//! Layout substitution for beat format tokens.
//!
//! Beat tokens are literal substrings that may appear anywhere inside a
//! strftime-style layout, interleaved with calendar directives. Calendar
//! directives are rendered first (no strftime directive emits `@`, so the
//! tokens survive that pass untouched), then every beat token is replaced
//! in one combined scan, longest token first at each position, so `@xxx`
//! is never matched as a prefix of `@xxx.x` and no replacement text is
//! re-matched by a lower-precision pattern.

use core::fmt::Write;

use crate::algorithm::round_down;
use crate::internet_time::InternetTime;

/// Whole-beat token, e.g. `@91`. Not zero-padded.
pub const BEATS: &str = "@xxx";
/// One fractional digit, e.g. `@91.2`.
pub const DECI_BEATS: &str = "@xxx.x";
/// Two fractional digits, e.g. `@91.29`. Also called "sub-beats".
pub const CENTI_BEATS: &str = "@xxx.xx";
/// Three fractional digits, e.g. `@91.296`.
pub const MILLI_BEATS: &str = "@xxx.xxx";
/// Six fractional digits, the full stored precision, e.g. `@91.296296`.
pub const MICRO_BEATS: &str = "@xxx.xxxxxx";

/// Beat precision levels, one per format token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    Whole,
    Deci,
    Centi,
    Milli,
    Micro,
}

impl Precision {
    /// Every level, longest token first. The replacement scan walks this
    /// in order so no token is shadowed by a shorter prefix of itself.
    pub const DESCENDING: [Precision; 5] = [
        Precision::Micro,
        Precision::Milli,
        Precision::Centi,
        Precision::Deci,
        Precision::Whole,
    ];

    /// The literal format token for this level.
    pub const fn token(self) -> &'static str {
        match self {
            Precision::Whole => BEATS,
            Precision::Deci => DECI_BEATS,
            Precision::Centi => CENTI_BEATS,
            Precision::Milli => MILLI_BEATS,
            Precision::Micro => MICRO_BEATS,
        }
    }

    const fn digits(self) -> u32 {
        match self {
            Precision::Whole => 0,
            Precision::Deci => 1,
            Precision::Centi => 2,
            Precision::Milli => 3,
            Precision::Micro => 6,
        }
    }
}

/// Render one beat token for `time`. Fractional values are truncated down
/// to the level's digit count; trailing zeros are dropped, matching the
/// shortest-round-trip float formatting of f64's Display.
fn render_token(time: &InternetTime, precision: Precision) -> String {
    match precision {
        Precision::Whole => format!("@{}", time.beats()),
        // The precise value already carries exactly six digits.
        Precision::Micro => format!("@{}", time.precise_beats()),
        _ => format!(
            "@{}",
            round_down(time.precise_beats(), precision.digits())
        ),
    }
}

pub(crate) fn render_layout(time: &InternetTime, layout: &str) -> String {
    // A malformed strftime directive makes chrono's writer report an
    // error; formatting stays total by falling back to the raw layout.
    let mut calendar = String::with_capacity(layout.len());
    if write!(calendar, "{}", time.datetime().format(layout)).is_err() {
        calendar.clear();
        calendar.push_str(layout);
    }
    let replacements =
        Precision::DESCENDING.map(|p| (p.token(), render_token(time, p)));

    let mut out = String::with_capacity(calendar.len());
    let mut rest = calendar.as_str();
    while let Some(c) = rest.chars().next() {
        if let Some((token, replacement)) = replacements
            .iter()
            .find(|(token, _)| rest.starts_with(token))
        {
            out.push_str(replacement);
            rest = &rest[token.len()..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}
