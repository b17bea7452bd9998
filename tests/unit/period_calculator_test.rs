//! Property tests for bi-monthly filing periods
//!
//! Six periods per year must tile the calendar exactly: contiguous,
//! non-overlapping, Jan 1 through Dec 31, with Gregorian February lengths.

use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;
use twvat401::periods::PeriodCalculator;
use twvat401::AppError;

proptest! {
    #[test]
    fn test_periods_tile_the_year(year in 1912i32..2900i32) {
        let periods = PeriodCalculator::periods_of_year(year).unwrap();
        prop_assert_eq!(periods.len(), 6);

        prop_assert_eq!(periods[0].start_date, NaiveDate::from_ymd_opt(year, 1, 1).unwrap());
        prop_assert_eq!(periods[5].end_date, NaiveDate::from_ymd_opt(year, 12, 31).unwrap());

        for pair in periods.windows(2) {
            prop_assert_eq!(pair[0].end_date + Duration::days(1), pair[1].start_date);
        }

        let total_days: i64 = periods.iter().map(|p| p.days()).sum();
        let year_days = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() { 366 } else { 365 };
        prop_assert_eq!(total_days, year_days);
    }

    #[test]
    fn test_period_boundaries(year in 1912i32..2900i32, bi_month in 1u32..=6u32) {
        let period = PeriodCalculator::calculate_tax_period(year, bi_month).unwrap();

        prop_assert_eq!(period.start_date.day(), 1);
        prop_assert_eq!(period.start_date.month(), 2 * bi_month - 1);
        prop_assert_eq!(period.end_date.month(), 2 * bi_month);
        // the day after the end date is in the next month
        prop_assert_ne!((period.end_date + Duration::days(1)).month(), period.end_date.month());

        prop_assert_eq!(period.roc_year_month.len(), 5);
        prop_assert!(period.roc_year_month.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_every_date_belongs_to_its_period(day_offset in 0i64..3650i64) {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(day_offset);
        let period = PeriodCalculator::period_for_date(date).unwrap();
        prop_assert!(period.contains(date));
    }

    #[test]
    fn test_out_of_range_bi_months_fail(bi_month in 7u32..1000u32) {
        let is_invalid_period = matches!(
            PeriodCalculator::calculate_tax_period(2024, bi_month),
            Err(AppError::InvalidPeriod(_))
        );
        prop_assert!(is_invalid_period);
    }
}

#[test]
fn test_known_periods() {
    let cases = [
        ((2024, 1), (2024, 1, 1), (2024, 2, 29), "11302"),
        ((2023, 1), (2023, 1, 1), (2023, 2, 28), "11202"),
        ((2024, 6), (2024, 11, 1), (2024, 12, 31), "11312"),
        ((2000, 1), (2000, 1, 1), (2000, 2, 29), "08902"),
        ((2100, 1), (2100, 1, 1), (2100, 2, 28), "18902"),
    ];

    for ((year, bi_month), start, end, code) in cases {
        let period = PeriodCalculator::calculate_tax_period(year, bi_month).unwrap();
        assert_eq!(period.start_date, NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap());
        assert_eq!(period.end_date, NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap());
        assert_eq!(period.roc_year_month, code);
    }
}

#[test]
fn test_roc_year() {
    assert_eq!(PeriodCalculator::to_roc_year(2024), 113);
    assert_eq!(PeriodCalculator::to_roc_year(1912), 1);
    assert_eq!(PeriodCalculator::format_year_month(2024, 12).unwrap(), "11312");
    assert_eq!(PeriodCalculator::format_year_month(2025, 1).unwrap(), "11401");
}

#[test]
fn test_zero_bi_month_fails() {
    assert!(matches!(
        PeriodCalculator::calculate_tax_period(2024, 0),
        Err(AppError::InvalidPeriod(_))
    ));
}
