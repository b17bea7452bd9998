pub mod invoice_classifier;
pub mod tax_aggregator;

pub use invoice_classifier::InvoiceClassifier;
pub use tax_aggregator::{TaxAggregator, TaxAmounts, TaxTotals};
