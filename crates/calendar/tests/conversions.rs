use mhw_calendar::{
    CalendarError, DayAxis, NaiveDate, date_from_ordinal, iso_from_ordinal, ordinal_from_date,
    ordinal_from_iso,
};

#[test]
fn ordinal_round_trip_over_four_years() {
    let start = ordinal_from_iso("2019-01-01").unwrap();
    let end = ordinal_from_iso("2022-12-31").unwrap();
    for ord in start..=end {
        let date = date_from_ordinal(ord).unwrap();
        assert_eq!(
            ordinal_from_date(date),
            ord,
            "roundtrip failed for ordinal {ord} ({date})"
        );
    }
}

#[test]
fn iso_strings_match_dates() {
    let cases: &[(&str, i64)] = &[
        ("1982-01-01", 723_546),
        ("2014-12-31", 735_598),
        ("2015-01-01", 735_599),
        ("2016-12-31", 736_329),
        ("2017-01-05", 736_334),
        ("2018-12-31", 737_059),
    ];
    for &(iso, expected) in cases {
        assert_eq!(
            ordinal_from_iso(iso).unwrap(),
            expected,
            "ordinal_from_iso({iso:?})"
        );
        assert_eq!(iso_from_ordinal(expected).unwrap(), iso);
    }
}

#[test]
fn leap_axis_slot_covers_whole_cycle() {
    let start = ordinal_from_iso("2020-01-01").unwrap();
    let slots: Vec<usize> = (start..start + 366)
        .map(|o| DayAxis::Leap.slot(date_from_ordinal(o).unwrap()))
        .collect();
    assert_eq!(slots, (0..366).collect::<Vec<_>>());
}

#[test]
fn noleap_axis_never_exceeds_slots() {
    let start = ordinal_from_iso("2019-01-01").unwrap();
    for o in start..start + 3 * 366 {
        let slot = DayAxis::NoLeap.slot(date_from_ordinal(o).unwrap());
        assert!(slot < DayAxis::NoLeap.slots(), "slot {slot} out of range");
    }
}

#[test]
fn feb_29_only_in_leap_years() {
    assert!(ordinal_from_iso("2020-02-29").is_ok());
    assert_eq!(
        ordinal_from_iso("2019-02-29").unwrap_err(),
        CalendarError::InvalidIsoDate {
            input: "2019-02-29".to_string()
        }
    );
    let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
    assert_eq!(DayAxis::Leap.slot(date), 59);
}
