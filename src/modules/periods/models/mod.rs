pub mod tax_period;

pub use tax_period::TaxPeriod;
