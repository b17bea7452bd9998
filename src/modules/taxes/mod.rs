pub mod models;
pub mod repositories;
pub mod services;

pub use models::{TaxCategory, TaxCode, TaxType};
pub use repositories::{InMemoryTaxCodeProvider, TaxCodeProvider};
pub use services::{InvoiceClassifier, TaxAggregator, TaxAmounts};
