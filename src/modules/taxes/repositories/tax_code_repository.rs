use async_trait::async_trait;
use std::collections::HashMap;

use crate::core::Result;
use crate::modules::taxes::models::{TaxCode, TaxType};

/// Lookup of tax codes by their short code
///
/// Implemented by the persistence layer of the surrounding application.
/// The classifier never calls this directly; callers resolve the code first
/// and hand the result in.
#[async_trait]
pub trait TaxCodeProvider: Send + Sync {
    /// Find a tax code, `None` when the code is unknown
    async fn find_by_code(&self, code: &str) -> Result<Option<TaxCode>>;
}

/// Provider backed by a fixed map
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaxCodeProvider {
    codes: HashMap<String, TaxCode>,
}

impl InMemoryTaxCodeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider preloaded with the common domestic codes
    ///
    /// * `TX5`   taxable at 5%, deductible
    /// * `TX5ND` taxable at 5%, not deductible (entertainment, gifts, etc.)
    /// * `ZR`    zero-rated
    /// * `EX`    exempt
    pub fn with_standard_codes() -> Self {
        let mut provider = Self::new();
        provider.register(
            TaxCode::new("TX5", TaxType::Taxable, true).with_description("Taxable 5%"),
        );
        provider.register(
            TaxCode::new("TX5ND", TaxType::Taxable, false)
                .with_description("Taxable 5%, non-deductible"),
        );
        provider.register(
            TaxCode::new("ZR", TaxType::ZeroRated, true).with_description("Zero-rated"),
        );
        provider.register(TaxCode::new("EX", TaxType::Exempt, false).with_description("Exempt"));
        provider
    }

    /// Add or replace a code
    pub fn register(&mut self, tax_code: TaxCode) {
        self.codes.insert(tax_code.code.clone(), tax_code);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[async_trait]
impl TaxCodeProvider for InMemoryTaxCodeProvider {
    async fn find_by_code(&self, code: &str) -> Result<Option<TaxCode>> {
        Ok(self.codes.get(code.trim()).cloned())
    }
}
