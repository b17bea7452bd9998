// Invoices module

pub mod models;

pub use models::{CustomsClearance, InvoiceDetail, InvoiceDirection, InvoiceRecord};
