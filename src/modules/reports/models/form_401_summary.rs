use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::modules::periods::models::TaxPeriod;

/// Figures of the Form 401 business tax return for one period
///
/// Built by `TaxAggregator::summarize`. Display and localisation are left
/// to the reporting layer; `to_json` is the hand-off format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form401Summary {
    pub period: TaxPeriod,
    pub tax_registration_number: String,

    /// Untaxed sales at the standard 5% rate
    pub taxable_sales_amount: Decimal,
    pub zero_rated_sales_amount: Decimal,
    pub exempt_sales_amount: Decimal,
    /// Sales without a tax code; must be classified before filing
    pub unclassified_sales_amount: Decimal,
    /// Output tax on taxable sales only
    pub output_tax: Decimal,

    /// Deductible purchases of goods and expenses
    pub purchase_amount: Decimal,
    pub purchase_input_tax: Decimal,
    /// Deductible purchases of fixed assets
    pub fixed_asset_purchase_amount: Decimal,
    pub fixed_asset_input_tax: Decimal,
    pub non_deductible_purchase_amount: Decimal,
    /// Total creditable input tax
    pub input_tax: Decimal,

    /// `output_tax - input_tax`
    pub net_tax: Decimal,
    pub is_refund: bool,

    pub output_count: usize,
    pub input_count: usize,
}

impl Form401Summary {
    /// Summary with every figure at zero
    pub fn empty(period: TaxPeriod, tax_registration_number: impl Into<String>) -> Self {
        Self {
            period,
            tax_registration_number: tax_registration_number.into(),
            taxable_sales_amount: Decimal::ZERO,
            zero_rated_sales_amount: Decimal::ZERO,
            exempt_sales_amount: Decimal::ZERO,
            unclassified_sales_amount: Decimal::ZERO,
            output_tax: Decimal::ZERO,
            purchase_amount: Decimal::ZERO,
            purchase_input_tax: Decimal::ZERO,
            fixed_asset_purchase_amount: Decimal::ZERO,
            fixed_asset_input_tax: Decimal::ZERO,
            non_deductible_purchase_amount: Decimal::ZERO,
            input_tax: Decimal::ZERO,
            net_tax: Decimal::ZERO,
            is_refund: false,
            output_count: 0,
            input_count: 0,
        }
    }

    /// Total untaxed sales over all categories
    pub fn total_sales_amount(&self) -> Decimal {
        self.taxable_sales_amount
            + self.zero_rated_sales_amount
            + self.exempt_sales_amount
            + self.unclassified_sales_amount
    }

    /// Tax to pay, zero for a refund period
    pub fn tax_payable(&self) -> Decimal {
        self.net_tax.max(Decimal::ZERO)
    }

    /// Tax to carry forward or refund, zero for a payable period
    pub fn tax_refundable(&self) -> Decimal {
        (-self.net_tax).max(Decimal::ZERO)
    }

    /// Whether sales without a tax code are present
    pub fn has_unclassified_sales(&self) -> bool {
        self.unclassified_sales_amount > Decimal::ZERO
    }

    pub fn is_empty(&self) -> bool {
        self.output_count == 0 && self.input_count == 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
