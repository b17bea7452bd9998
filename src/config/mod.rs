use serde::Deserialize;
use std::env;

use crate::core::{is_digits, AppError, Result};
use crate::modules::media::models::{InvoiceFormat, MediaFileOptions};

pub mod logging;

pub use logging::{LogFormat, LoggingConfig};

/// Filing configuration for the reporting company
#[derive(Debug, Clone, Deserialize)]
pub struct FilingConfig {
    /// Unified business number (統一編號), 8 digits
    pub tax_registration_number: String,
    /// Tax serial number (稅籍編號), 9 digits
    pub tax_serial_number: Option<String>,
    /// Invoice format used when none is given per run
    pub invoice_format: InvoiceFormat,
    pub logging: LoggingConfig,
}

impl FilingConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tax_registration_number = lookup("TAX_REGISTRATION_NUMBER")
            .ok_or_else(|| AppError::configuration("TAX_REGISTRATION_NUMBER not set"))?;

        let tax_serial_number = lookup("TAX_SERIAL_NUMBER").filter(|s| !s.trim().is_empty());

        let invoice_format = match lookup("INVOICE_FORMAT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::configuration(format!("Invalid INVOICE_FORMAT: {}", raw)))?,
            None => InvoiceFormat::EInvoice,
        };

        let config = FilingConfig {
            tax_registration_number: tax_registration_number.trim().to_string(),
            tax_serial_number: tax_serial_number.map(|s| s.trim().to_string()),
            invoice_format,
            logging: LoggingConfig::from_lookup(&lookup)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !is_digits(&self.tax_registration_number, 8) {
            return Err(AppError::configuration(
                "TAX_REGISTRATION_NUMBER must be exactly 8 digits",
            ));
        }

        if let Some(serial) = &self.tax_serial_number {
            if !is_digits(serial, 9) {
                return Err(AppError::configuration(
                    "TAX_SERIAL_NUMBER must be exactly 9 digits",
                ));
            }
        }

        Ok(())
    }

    /// Media file options for one filing run
    pub fn media_options(&self, year: i32, bi_month: u32) -> MediaFileOptions {
        MediaFileOptions {
            tax_registration_number: self.tax_registration_number.clone(),
            tax_serial_number: self.tax_serial_number.clone(),
            year,
            bi_month,
            invoice_format: self.invoice_format,
        }
    }
}
