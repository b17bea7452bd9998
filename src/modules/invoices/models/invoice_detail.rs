// Strictly typed invoice snapshot handed to the filing core.
//
// The caller owns the data; the core only borrows it for one computation.
// `total_amount = untaxed_amount + tax_amount` is the caller's responsibility
// and is never re-derived here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{ensure_non_negative, Result};
use crate::modules::taxes::models::TaxCategory;

/// Whether an invoice was issued (sale) or received (purchase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceDirection {
    /// Sales invoice, carries output tax
    Output,
    /// Purchase invoice, carries input tax
    Input,
}

impl std::fmt::Display for InvoiceDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceDirection::Output => write!(f, "OUTPUT"),
            InvoiceDirection::Input => write!(f, "INPUT"),
        }
    }
}

impl std::str::FromStr for InvoiceDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OUTPUT" | "SALES" => Ok(InvoiceDirection::Output),
            "INPUT" | "PURCHASE" => Ok(InvoiceDirection::Input),
            _ => Err(format!("Invalid invoice direction: {}", s)),
        }
    }
}

/// How a zero-rated sale left the country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomsClearance {
    /// Not exported through customs (mark "1")
    NonCustoms,
    /// Exported through customs (mark "2")
    Customs,
}

impl CustomsClearance {
    pub fn mark(&self) -> char {
        match self {
            CustomsClearance::NonCustoms => '1',
            CustomsClearance::Customs => '2',
        }
    }
}

impl std::str::FromStr for CustomsClearance {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "non_customs" => Ok(CustomsClearance::NonCustoms),
            "2" | "customs" => Ok(CustomsClearance::Customs),
            _ => Err(format!("Invalid customs clearance mark: {}", s)),
        }
    }
}

/// One classified invoice of a filing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub invoice_id: String,
    /// Two letters plus eight digits, separators allowed
    pub invoice_number: String,
    pub date: NaiveDate,
    /// Counterparty unified business number (8 chars), absent for consumers
    pub counterparty_tax_id: Option<String>,
    pub untaxed_amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub tax_category: TaxCategory,
    pub is_deductible: bool,
    pub is_fixed_asset: bool,
    pub direction: InvoiceDirection,
    /// Only meaningful for zero-rated sales
    #[serde(default)]
    pub customs_clearance: Option<CustomsClearance>,
}

impl InvoiceDetail {
    /// Checks the monetary fields are non-negative
    pub fn validate_amounts(&self) -> Result<()> {
        ensure_non_negative("untaxed_amount", self.untaxed_amount)?;
        ensure_non_negative("tax_amount", self.tax_amount)?;
        ensure_non_negative("total_amount", self.total_amount)?;
        Ok(())
    }

    pub fn is_output(&self) -> bool {
        self.direction == InvoiceDirection::Output
    }

    pub fn is_input(&self) -> bool {
        self.direction == InvoiceDirection::Input
    }
}
