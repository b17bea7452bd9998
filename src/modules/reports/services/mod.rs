pub mod filing_service;

pub use filing_service::{FilingPackage, FilingService};
