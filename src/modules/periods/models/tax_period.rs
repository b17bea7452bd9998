use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bi-monthly business tax filing window
///
/// Built by `PeriodCalculator` and immutable afterwards. Both dates are
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPeriod {
    /// Gregorian year
    pub year: i32,
    /// Filing window index, 1 (Jan–Feb) through 6 (Nov–Dec)
    pub bi_month: u32,
    /// First day of month `2 * bi_month - 1`
    pub start_date: NaiveDate,
    /// Last day of month `2 * bi_month`
    pub end_date: NaiveDate,
    /// ROC year and closing month of the window, e.g. "11302"
    pub roc_year_month: String,
}

impl TaxPeriod {
    /// Whether `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// First calendar month of the window
    pub fn start_month(&self) -> u32 {
        2 * self.bi_month - 1
    }

    /// Second calendar month of the window
    pub fn end_month(&self) -> u32 {
        2 * self.bi_month
    }

    /// Number of calendar days in the window
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
