use serde::{Deserialize, Serialize};

use crate::core::{is_digits, AppError, Result};
use crate::modules::periods::{PeriodCalculator, TaxPeriod};

/// Invoice stock the company issues and receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceFormat {
    /// Electronic uniform invoice
    EInvoice,
    /// Triplicate paper uniform invoice
    ThreeCopy,
}

impl std::fmt::Display for InvoiceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceFormat::EInvoice => write!(f, "E_INVOICE"),
            InvoiceFormat::ThreeCopy => write!(f, "THREE_COPY"),
        }
    }
}

impl std::str::FromStr for InvoiceFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "E_INVOICE" | "EINVOICE" => Ok(InvoiceFormat::EInvoice),
            "THREE_COPY" | "TRIPLICATE" => Ok(InvoiceFormat::ThreeCopy),
            _ => Err(format!("Invalid invoice format: {}", s)),
        }
    }
}

/// Input to a single media file run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFileOptions {
    /// Unified business number of the filing company, 8 digits
    pub tax_registration_number: String,
    /// Tax serial number assigned by the tax office, 9 digits
    #[serde(default)]
    pub tax_serial_number: Option<String>,
    pub year: i32,
    pub bi_month: u32,
    pub invoice_format: InvoiceFormat,
}

impl MediaFileOptions {
    pub fn new(
        tax_registration_number: impl Into<String>,
        year: i32,
        bi_month: u32,
        invoice_format: InvoiceFormat,
    ) -> Self {
        Self {
            tax_registration_number: tax_registration_number.into(),
            tax_serial_number: None,
            year,
            bi_month,
            invoice_format,
        }
    }

    pub fn with_tax_serial_number(mut self, serial: impl Into<String>) -> Self {
        self.tax_serial_number = Some(serial.into());
        self
    }

    /// Checks the company identifiers
    pub fn validate(&self) -> Result<()> {
        if !is_digits(&self.tax_registration_number, 8) {
            return Err(AppError::invalid_tax_id(
                "tax_registration_number",
                self.tax_registration_number.as_str(),
            ));
        }

        if let Some(serial) = &self.tax_serial_number {
            if !is_digits(serial, 9) {
                return Err(AppError::invalid_tax_id("tax_serial_number", serial.as_str()));
            }
        }

        Ok(())
    }

    /// Filing window the options refer to
    pub fn period(&self) -> Result<TaxPeriod> {
        PeriodCalculator::calculate_tax_period(self.year, self.bi_month)
    }
}
