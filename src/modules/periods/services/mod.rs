pub mod period_calculator;

pub use period_calculator::PeriodCalculator;
