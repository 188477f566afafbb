use mhw_calendar::CalendarError;
use mhw_series::{DateInput, SeriesError, TimeSeries, normalize_days};

fn jan_2020() -> TimeSeries {
    TimeSeries::new(
        &DateInput::range("2020-01-01", "2020-01-05"),
        vec![20.0, 20.5, 21.0, 21.5, 22.0],
    )
    .unwrap()
}

#[test]
fn iso_range_yields_consecutive_ordinals() {
    let s = jan_2020();
    assert_eq!(s.days(), &[737425, 737426, 737427, 737428, 737429]);
    assert_eq!(s.temperature().len(), 5);
}

#[test]
fn reversed_range_is_invalid() {
    let err = TimeSeries::new(&DateInput::range("2020-01-05", "2020-01-01"), vec![0.0; 5])
        .unwrap_err();
    assert!(matches!(err, SeriesError::InvalidRange { .. }));
}

#[test]
fn iso_range_and_ordinals_agree() {
    let from_iso = normalize_days(&DateInput::range("2020-02-27", "2020-03-02"), 5).unwrap();
    let from_ordinals =
        normalize_days(&DateInput::from(vec![737482, 737483, 737484, 737485, 737486]), 5)
            .unwrap();
    assert_eq!(from_iso, from_ordinals);
}

#[test]
fn adjacent_block_appends_with_no_gap() {
    let mut s = jan_2020();
    s.merge(&DateInput::from(vec![737430, 737431]), vec![1.0, 2.0], 0)
        .unwrap();
    assert_eq!(s.len(), 7);
    assert_eq!(s.last_day(), 737431);
    assert!(s.gaps().is_empty());
}

#[test]
fn gap_within_bound_is_kept_as_hole() {
    let mut s = jan_2020();
    let report = s
        .merge(&DateInput::from(vec![737432]), vec![1.0], 2)
        .unwrap();
    assert_eq!(report.gap, 2);
    assert_eq!(s.days().len(), s.temperature().len());
    assert_eq!(s.gaps().len(), 1);
    assert_eq!(s.gaps()[0].missing, 2);
}

#[test]
fn gap_over_bound_rejected() {
    let mut s = jan_2020();
    let err = s
        .merge(&DateInput::from(vec![737432]), vec![1.0], 1)
        .unwrap_err();
    assert_eq!(
        err,
        SeriesError::GapTooLarge {
            gap: 2,
            max_allowed: 1
        }
    );
}

#[test]
fn any_gap_rejected_when_contiguity_required() {
    let mut s = jan_2020();
    let err = s
        .merge(&DateInput::from(vec![737431]), vec![1.0], 0)
        .unwrap_err();
    assert_eq!(
        err,
        SeriesError::NonContiguous {
            expected_start: 737430,
            gap: 1
        }
    );
}

#[test]
fn starting_on_last_day_overlaps() {
    let mut s = jan_2020();
    let err = s
        .merge(&DateInput::from(vec![737429]), vec![1.0], 5)
        .unwrap_err();
    assert_eq!(
        err,
        SeriesError::Overlap {
            last_day: 737429,
            first_day: 737429
        }
    );
}

#[test]
fn merged_block_from_iso_range() {
    let mut s = jan_2020();
    s.merge(&DateInput::range("2020-01-08", "2020-01-10"), vec![0.0; 3], 2)
        .unwrap();
    assert_eq!(s.last_day(), 737434);
    assert_eq!(s.gaps()[0].after, 737429);
    assert_eq!(s.gaps()[0].before, 737432);
}

#[test]
fn prefix_unchanged_and_days_monotonic() {
    let mut s = jan_2020();
    let before = s.clone();
    s.merge(&DateInput::from(vec![737431, 737435]), vec![1.0, 2.0], 1)
        .unwrap();
    assert_eq!(&s.days()[..before.len()], before.days());
    assert_eq!(&s.temperature()[..before.len()], before.temperature());
    assert!(s.days().windows(2).all(|w| w[1] > w[0]));
    assert!(s.days()[before.len()..].iter().all(|&d| d > before.last_day()));
}

#[test]
fn failed_merge_leaves_series_identical() {
    let mut s = jan_2020();
    let before = s.clone();

    let attempts: Vec<(DateInput, Vec<f64>, usize)> = vec![
        (DateInput::from(vec![737428]), vec![1.0], 0),
        (DateInput::from(vec![737440]), vec![1.0], 3),
        (DateInput::from(vec![737431]), vec![1.0], 0),
        (DateInput::from(vec![737430, 737431]), vec![1.0], 0),
        (DateInput::from(vec![737431, 737430]), vec![1.0, 2.0], 5),
        (DateInput::range("2020-01-06", "2020-13-01"), vec![1.0], 0),
    ];
    for (input, temp, max_gap) in attempts {
        assert!(s.merge(&input, temp, max_gap).is_err());
        assert_eq!(s, before);
    }
}

#[test]
fn merged_leaves_original_alone() {
    let s = jan_2020();
    let grown = s
        .merged(&DateInput::from(vec![737430]), vec![3.0], 0)
        .unwrap();
    assert_eq!(s.len(), 5);
    assert_eq!(grown.len(), 6);
}

#[test]
fn multi_year_blocks() {
    // 1982-01-01 .. 2014-12-31, then 2015-2016 contiguous, then a 4-day hole.
    let n1 = (735598 - 723546 + 1) as usize;
    let mut s = TimeSeries::new(
        &DateInput::range("1982-01-01", "2014-12-31"),
        vec![10.0; n1],
    )
    .unwrap();
    assert_eq!(s.first_day(), 723546);
    assert_eq!(s.last_day(), 735598);

    s.merge(
        &DateInput::range("2015-01-01", "2016-12-31"),
        vec![10.0; 731],
        0,
    )
    .unwrap();
    assert_eq!(s.last_day(), 736329);

    let n3 = (737059 - 736334 + 1) as usize;
    let report = s
        .merge(
            &DateInput::range("2017-01-05", "2018-12-31"),
            vec![10.0; n3],
            4,
        )
        .unwrap();
    assert_eq!(report.gap, 4);
    assert_eq!(s.len(), n1 + 731 + n3);
}

#[test]
fn largest_gap_allowance_accepts_small_hole() {
    let mut s = TimeSeries::new(&DateInput::from(vec![1, 2, 3]), vec![0.0; 3]).unwrap();
    let report = s.merge(&DateInput::from(vec![5]), vec![1.0], usize::MAX).unwrap();
    assert_eq!(report.gap, 1);
    assert_eq!(s.days(), &[1, 2, 3, 5]);
}

#[test]
fn ordinals_off_the_calendar_rejected() {
    for days in [vec![i64::MIN], vec![0, 1], vec![1, i64::MAX]] {
        let n = days.len();
        let err = TimeSeries::new(&DateInput::from(days), vec![0.0; n]).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::Calendar(CalendarError::OrdinalOutOfRange { .. })
        ));
    }

    let mut s = TimeSeries::new(&DateInput::from(vec![1]), vec![0.0]).unwrap();
    let before = s.clone();
    assert!(s.merge(&DateInput::from(vec![i64::MAX]), vec![0.0], 3).is_err());
    assert_eq!(s, before);
}
