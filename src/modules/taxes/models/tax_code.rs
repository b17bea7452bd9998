use serde::{Deserialize, Serialize};

/// Tax type carried by a tax code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxType {
    Taxable,
    ZeroRated,
    Exempt,
}

impl std::fmt::Display for TaxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxType::Taxable => write!(f, "TAXABLE"),
            TaxType::ZeroRated => write!(f, "ZERO_RATED"),
            TaxType::Exempt => write!(f, "EXEMPT"),
        }
    }
}

impl std::str::FromStr for TaxType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TAXABLE" => Ok(TaxType::Taxable),
            "ZERO_RATED" => Ok(TaxType::ZeroRated),
            "EXEMPT" => Ok(TaxType::Exempt),
            _ => Err(format!("Invalid tax type: {}", s)),
        }
    }
}

/// Resolved tax code as supplied by the tax-code lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCode {
    pub code: String,
    pub tax_type: TaxType,
    pub is_deductible: bool,
    pub description: Option<String>,
}

impl TaxCode {
    pub fn new(code: impl Into<String>, tax_type: TaxType, is_deductible: bool) -> Self {
        Self {
            code: code.into(),
            tax_type,
            is_deductible,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
