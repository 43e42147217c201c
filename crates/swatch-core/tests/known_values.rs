//! Integration test: parse RFC 3339 instants → wrap → verify beat values
//! and rendered layouts through the public API only.

use chrono::DateTime;
use swatch_core::{Algorithm, InternetTime, BEATS, CENTI_BEATS, MICRO_BEATS};

fn at(rfc3339: &str) -> InternetTime {
    let dt = DateTime::parse_from_rfc3339(rfc3339).expect("test instant parses");
    InternetTime::from_datetime(dt)
}

#[test]
fn morning_in_brisbane_is_beat_91_in_biel() {
    let t = at("2023-01-02T11:11:28+10:00");
    assert_eq!(t.beats(), 91);
    assert_eq!(t.format(BEATS), "@91");
    assert_eq!(t.format("%Y-%m-%d @xxx"), "2023-01-02 @91");
}

#[test]
fn whole_beats_match_across_offsets_and_algorithms() {
    for (input, expected) in [
        ("2006-02-15T12:00:00-06:00", 791),
        ("2008-05-11T03:10:07+10:00", 757),
        ("2023-01-02T11:11:28+10:00", 91),
    ] {
        let seconds = at(input);
        let nanos = seconds.with_algorithm(Algorithm::NanosecondBased);
        assert_eq!(seconds.beats(), expected, "{input}");
        assert_eq!(nanos.beats(), expected, "{input}");
    }
}

#[test]
fn precise_beats_floor_to_whole_beats() {
    for input in [
        "2006-02-15T12:00:00-06:00",
        "2008-05-11T03:10:07+10:00",
        "2023-01-02T11:11:28+10:00",
        "2023-01-02T23:59:59.999999+01:00",
    ] {
        let t = at(input);
        assert_eq!(f64::from(t.beats()), t.precise_beats().floor(), "{input}");
    }
}

#[test]
fn end_of_day_stays_on_beat_999() {
    let seconds = at("2023-01-02T23:59:59.999999+01:00");
    assert_eq!(seconds.beats(), 999);

    let nanos = at("2023-01-02T23:59:59.999999999+01:00")
        .with_algorithm(Algorithm::NanosecondBased);
    assert_eq!(nanos.beats(), 999);
    assert_eq!(nanos.format(MICRO_BEATS), "@999.999999");
}

#[test]
fn centibeat_layout_with_date_prefix() {
    // The default CLI layout, with the -d prefix applied.
    let t = at("2023-01-02T11:11:28+10:00");
    let layout = format!("%Y-%m-%d{CENTI_BEATS}");
    assert_eq!(t.format(&layout), "2023-01-02@91.29");
}

#[test]
fn rendered_layouts_never_leak_tokens() {
    let t = at("2023-01-02T11:11:28+10:00");
    for layout in ["@xxx.xxxxxx", "@xxx.xxx", "@xxx.xx", "@xxx.x", "@xxx"] {
        let rendered = t.format(layout);
        assert!(
            !rendered.contains("@x") && !rendered.contains("xxx"),
            "token fragment left in {rendered:?} for layout {layout:?}"
        );
    }
}
