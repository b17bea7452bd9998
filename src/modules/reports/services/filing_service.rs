use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{InvoiceDetail, InvoiceDirection, InvoiceRecord};
use crate::modules::media::models::{MediaFileOptions, MediaFileResult};
use crate::modules::media::services::{MediaFileBuilder, MediaFileValidator};
use crate::modules::reports::models::Form401Summary;
use crate::modules::taxes::models::TaxCode;
use crate::modules::taxes::repositories::TaxCodeProvider;
use crate::modules::taxes::services::TaxAggregator;

/// Everything produced by one filing run
#[derive(Debug, Clone, Serialize)]
pub struct FilingPackage {
    pub summary: Form401Summary,
    pub media_file: MediaFileResult,
}

/// Prepares a period's Form 401 filing from stored invoice rows
///
/// Resolves tax codes through the injected provider, turns rows into
/// classified invoices, then runs the pure aggregation and encoding core.
pub struct FilingService {
    tax_codes: Arc<dyn TaxCodeProvider>,
}

impl FilingService {
    /// Create a new filing service
    pub fn new(tax_codes: Arc<dyn TaxCodeProvider>) -> Self {
        Self { tax_codes }
    }

    /// Build the summary and media file for one period
    ///
    /// # Arguments
    /// * `records` - Invoice rows of the company for the period, any order
    /// * `options` - Company identifiers, period and invoice stock
    ///
    /// # Errors
    /// Fails on unknown tax codes, malformed rows, invalid options, and any
    /// record the encoder rejects (e.g. a sale without a tax code).
    pub async fn prepare_filing(
        &self,
        records: Vec<InvoiceRecord>,
        options: &MediaFileOptions,
    ) -> Result<FilingPackage> {
        options.validate()?;
        let period = options.period()?;

        info!(
            "Preparing filing for {}: period {} to {}, {} invoice rows",
            options.tax_registration_number,
            period.start_date,
            period.end_date,
            records.len()
        );

        let mut invoices = self.classify_records(records).await?;
        Self::order_for_filing(&mut invoices);

        let summary =
            TaxAggregator::summarize(&period, &options.tax_registration_number, &invoices);
        if summary.has_unclassified_sales() {
            warn!(
                "Unclassified sales of {} in period {}",
                summary.unclassified_sales_amount, period.roc_year_month
            );
        }

        let media_file = MediaFileBuilder::generate_media_file(&invoices, options)?;

        let validation = MediaFileValidator::validate_media_file(&media_file.content);
        if !validation.valid || validation.record_count != invoices.len() {
            return Err(AppError::internal(format!(
                "generated media file failed self-check: {}",
                validation.errors.join("; ")
            )));
        }

        if summary.net_tax != media_file.net_tax {
            return Err(AppError::internal(format!(
                "summary net tax {} differs from media file net tax {}",
                summary.net_tax, media_file.net_tax
            )));
        }

        info!(
            "Filing prepared for {}: {} records, net tax {} ({})",
            period.roc_year_month,
            media_file.record_count,
            summary.net_tax,
            if summary.is_refund { "refund" } else { "payable" }
        );

        Ok(FilingPackage {
            summary,
            media_file,
        })
    }

    /// Sales before purchases, each by invoice date
    ///
    /// The sort is stable, so rows sharing a direction and date keep the
    /// order the caller supplied.
    pub fn order_for_filing(invoices: &mut [InvoiceDetail]) {
        invoices.sort_by_key(|invoice| {
            let rank = match invoice.direction {
                InvoiceDirection::Output => 0,
                InvoiceDirection::Input => 1,
            };
            (rank, invoice.date)
        });
    }

    async fn classify_records(&self, records: Vec<InvoiceRecord>) -> Result<Vec<InvoiceDetail>> {
        let mut resolved: HashMap<String, TaxCode> = HashMap::new();
        let mut invoices = Vec::with_capacity(records.len());

        for record in records {
            let code = record
                .tax_code
                .as_deref()
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_string);

            let tax_code = match code {
                None => None,
                Some(code) => {
                    if !resolved.contains_key(&code) {
                        let found = self.tax_codes.find_by_code(&code).await?.ok_or_else(|| {
                            AppError::not_found(format!(
                                "tax code '{}' of invoice {}",
                                code, record.invoice_number
                            ))
                        })?;
                        debug!("Resolved tax code {} as {}", code, found.tax_type);
                        resolved.insert(code.clone(), found);
                    }
                    resolved.get(&code).cloned()
                }
            };

            invoices.push(record.into_detail(tax_code.as_ref())?);
        }

        Ok(invoices)
    }
}


// Provider-backed flows are covered in tests/integration/filing_flow_test.rs
