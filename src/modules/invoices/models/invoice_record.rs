use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invoice_detail::{CustomsClearance, InvoiceDetail, InvoiceDirection};
use crate::core::{AppError, Result};
use crate::modules::taxes::models::TaxCode;
use crate::modules::taxes::services::InvoiceClassifier;

/// Invoice row as delivered by the storage layer
///
/// Fields are loosely typed the way they come out of the database. Turn it
/// into an `InvoiceDetail` with `into_detail` before handing it to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_id: String,
    pub invoice_number: String,
    pub date: NaiveDate,
    pub counterparty_tax_id: Option<String>,
    pub untaxed_amount: Decimal,
    pub tax_amount: Decimal,
    /// Falls back to untaxed + tax when missing
    pub total_amount: Option<Decimal>,
    /// "OUTPUT"/"INPUT" (or "SALES"/"PURCHASE")
    pub direction: String,
    /// Tax code reference, `None` when not yet classified
    pub tax_code: Option<String>,
    #[serde(default)]
    pub is_fixed_asset: bool,
    #[serde(default)]
    pub customs_clearance: Option<String>,
}

impl InvoiceRecord {
    /// Validate and classify the row
    ///
    /// `tax_code` is the resolved counterpart of `self.tax_code`.
    pub fn into_detail(self, tax_code: Option<&TaxCode>) -> Result<InvoiceDetail> {
        let direction: InvoiceDirection = self.direction.parse().map_err(|e: String| {
            AppError::validation(format!("invoice {}: {}", self.invoice_number, e))
        })?;

        let customs_clearance = match self.customs_clearance.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<CustomsClearance>().map_err(|e| {
                AppError::validation(format!("invoice {}: {}", self.invoice_number, e))
            })?),
        };

        let counterparty_tax_id = self
            .counterparty_tax_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        let detail = InvoiceDetail {
            total_amount: self
                .total_amount
                .unwrap_or(self.untaxed_amount + self.tax_amount),
            invoice_id: self.invoice_id,
            invoice_number: self.invoice_number,
            date: self.date,
            counterparty_tax_id,
            untaxed_amount: self.untaxed_amount,
            tax_amount: self.tax_amount,
            tax_category: InvoiceClassifier::determine_tax_category(tax_code),
            is_deductible: InvoiceClassifier::is_deductible(tax_code),
            is_fixed_asset: self.is_fixed_asset,
            direction,
            customs_clearance,
        };

        detail.validate_amounts()?;
        Ok(detail)
    }
}
