pub mod models;
pub mod services;

pub use models::TaxPeriod;
pub use services::PeriodCalculator;
