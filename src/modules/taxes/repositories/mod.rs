pub mod tax_code_repository;

pub use tax_code_repository::{InMemoryTaxCodeProvider, TaxCodeProvider};
