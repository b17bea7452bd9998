use chrono::{Datelike, NaiveDate};

use crate::core::{AppError, Result};
use crate::modules::periods::models::TaxPeriod;

/// Offset between the Gregorian and Republic of China calendars
pub const ROC_YEAR_OFFSET: i32 = 1911;

/// Converts bi-month indices into calendar windows and ROC codes
pub struct PeriodCalculator;

impl PeriodCalculator {
    /// Calculate the filing window for `(year, bi_month)`
    ///
    /// `bi_month` 1 covers January and February, 6 covers November and
    /// December. Anything outside 1..=6 is rejected.
    pub fn calculate_tax_period(year: i32, bi_month: u32) -> Result<TaxPeriod> {
        if !(1..=6).contains(&bi_month) {
            return Err(AppError::invalid_period(format!(
                "bi_month must be between 1 and 6, got {}",
                bi_month
            )));
        }

        let start_month = 2 * bi_month - 1;
        let end_month = 2 * bi_month;

        let start_date = NaiveDate::from_ymd_opt(year, start_month, 1).ok_or_else(|| {
            AppError::invalid_period(format!("year {} is out of range", year))
        })?;
        let end_date = NaiveDate::from_ymd_opt(year, end_month, days_in_month(year, end_month))
            .ok_or_else(|| AppError::invalid_period(format!("year {} is out of range", year)))?;

        let roc_year_month = Self::format_year_month(year, end_month)?;

        Ok(TaxPeriod {
            year,
            bi_month,
            start_date,
            end_date,
            roc_year_month,
        })
    }

    /// Gregorian year to ROC year
    pub fn to_roc_year(year: i32) -> i32 {
        year - ROC_YEAR_OFFSET
    }

    /// Five-character ROC year-month code: 3-digit year, 2-digit month
    ///
    /// 2024-12 becomes "11312". Years that do not fit in three ROC digits
    /// are rejected instead of widening the field.
    pub fn format_year_month(year: i32, month: u32) -> Result<String> {
        if !(1..=12).contains(&month) {
            return Err(AppError::invalid_period(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }

        let roc_year = Self::to_roc_year(year);
        if !(1..=999).contains(&roc_year) {
            return Err(AppError::invalid_period(format!(
                "year {} cannot be expressed as a 3-digit ROC year",
                year
            )));
        }

        Ok(format!("{:03}{:02}", roc_year, month))
    }

    /// All six windows of a year, in order
    pub fn periods_of_year(year: i32) -> Result<Vec<TaxPeriod>> {
        (1..=6)
            .map(|bi_month| Self::calculate_tax_period(year, bi_month))
            .collect()
    }

    /// The window a given date belongs to
    pub fn period_for_date(date: NaiveDate) -> Result<TaxPeriod> {
        Self::calculate_tax_period(date.year(), (date.month() + 1) / 2)
    }
}

/// Calendar length of a month under the Gregorian leap-year rule
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Divisible by 4, except centuries not divisible by 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
