use serde::{Deserialize, Serialize};

/// Statutory tax category of an invoice
///
/// Derived from the invoice's tax code at classification time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxCategory {
    /// Standard 5% business tax
    #[serde(rename = "TAXABLE_5")]
    Taxable5,
    /// 0% rate, typically exports
    ZeroRated,
    /// Exempt from business tax
    Exempt,
    /// No tax code assigned yet
    NonTaxable,
}

impl std::fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxCategory::Taxable5 => write!(f, "TAXABLE_5"),
            TaxCategory::ZeroRated => write!(f, "ZERO_RATED"),
            TaxCategory::Exempt => write!(f, "EXEMPT"),
            TaxCategory::NonTaxable => write!(f, "NON_TAXABLE"),
        }
    }
}
