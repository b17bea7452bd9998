use tracing::{debug, info};

use crate::core::{AppError, Result};
use crate::modules::invoices::models::InvoiceDetail;
use crate::modules::media::models::{MediaFileOptions, MediaFileResult};
use crate::modules::media::services::record_encoder::{MediaRecordEncoder, RECORD_LENGTH};
use crate::modules::taxes::services::TaxTotals;

/// Concatenates encoded records into a media file
pub struct MediaFileBuilder;

impl MediaFileBuilder {
    /// Encode `invoices` in the given order
    ///
    /// Records are never reordered and sequence numbers start at 1. Counts
    /// and totals are gathered in the same pass, not re-read from the bytes.
    pub fn generate_media_file(
        invoices: &[InvoiceDetail],
        options: &MediaFileOptions,
    ) -> Result<MediaFileResult> {
        options.validate()?;
        let period = options.period()?;

        let mut content = Vec::with_capacity(invoices.len() * RECORD_LENGTH);
        let mut totals = TaxTotals::default();

        for (index, invoice) in invoices.iter().enumerate() {
            let sequence_number = u32::try_from(index + 1).map_err(|_| AppError::FieldOverflow {
                field: "sequence_number",
                width: 7,
                value: (index + 1).to_string(),
            })?;

            let record = MediaRecordEncoder::generate_media_line(invoice, options, sequence_number)?;
            content.extend_from_slice(&record);
            totals.add(invoice);
        }

        let record_count = invoices.len();
        if content.len() != record_count * RECORD_LENGTH {
            return Err(AppError::internal(format!(
                "media content is {} bytes for {} records",
                content.len(),
                record_count
            )));
        }

        let amounts = totals.amounts();

        info!(
            "Media file generated for {} ({}): {} records, {} sales, {} purchases",
            options.tax_registration_number,
            period.roc_year_month,
            record_count,
            totals.output_count,
            totals.input_count
        );
        debug!(
            "Media file totals: output_tax={}, input_tax={}, net_tax={}, refund={}",
            amounts.output_tax, amounts.input_tax, amounts.net_tax, amounts.is_refund
        );

        Ok(MediaFileResult {
            content,
            record_count,
            output_count: totals.output_count,
            input_count: totals.input_count,
            output_amount: totals.output_amount,
            input_amount: totals.input_amount,
            output_tax: amounts.output_tax,
            input_tax: amounts.input_tax,
            net_tax: amounts.net_tax,
            is_refund: amounts.is_refund,
        })
    }
}
