use chrono::Datelike;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::{ensure_non_negative, round_to_unit, AppError, Result};
use crate::modules::invoices::models::{InvoiceDetail, InvoiceDirection};
use crate::modules::media::models::media_record::{
    FieldSpec, AGGREGATE_MARK, BUYER_TAX_ID, CUSTOMS_MARK, DEDUCTION_CODE, FORMAT_CODE,
    INVOICE_NUMBER, RESERVED, SALES_AMOUNT, SELLER_TAX_ID, SEQUENCE_NUMBER, SPECIAL_TAX_RATE,
    TAX_AMOUNT, TAX_SERIAL_NUMBER, TAX_TYPE, YEAR_MONTH,
};
use crate::modules::media::models::{InvoiceFormat, MediaFileOptions};
use crate::modules::periods::PeriodCalculator;
use crate::modules::taxes::models::TaxCategory;
use crate::modules::taxes::services::InvoiceClassifier;

/// Length of one media record in bytes
pub const RECORD_LENGTH: usize = 81;

/// One encoded media record
pub type MediaRecord = [u8; RECORD_LENGTH];

/// Encodes invoices into fixed-width Form 401 media records
///
/// Pure and deterministic. Numeric slots are right-aligned and zero padded,
/// text slots left-aligned and space padded.
pub struct MediaRecordEncoder;

impl MediaRecordEncoder {
    /// Two-character format code for a direction and invoice stock
    pub fn format_code(direction: InvoiceDirection, invoice_format: InvoiceFormat) -> &'static str {
        match (direction, invoice_format) {
            (InvoiceDirection::Output, InvoiceFormat::EInvoice) => "35",
            (InvoiceDirection::Output, InvoiceFormat::ThreeCopy) => "31",
            (InvoiceDirection::Input, InvoiceFormat::EInvoice) => "25",
            (InvoiceDirection::Input, InvoiceFormat::ThreeCopy) => "21",
        }
    }

    /// Encode one invoice as the `sequence_number`-th record of a file
    pub fn generate_media_line(
        invoice: &InvoiceDetail,
        options: &MediaFileOptions,
        sequence_number: u32,
    ) -> Result<MediaRecord> {
        options.validate()?;
        invoice.validate_amounts()?;

        let tax_type = InvoiceClassifier::tax_type_code(invoice.tax_category).map_err(|_| {
            AppError::NonTaxableCategory {
                invoice_number: Some(invoice.invoice_number.clone()),
            }
        })?;

        let year_month =
            PeriodCalculator::format_year_month(invoice.date.year(), invoice.date.month())?;

        let own_tax_id = Some(options.tax_registration_number.as_str());
        let counterparty_tax_id = invoice.counterparty_tax_id.as_deref();
        let (buyer, seller) = match invoice.direction {
            InvoiceDirection::Output => (counterparty_tax_id, own_tax_id),
            InvoiceDirection::Input => (own_tax_id, counterparty_tax_id),
        };

        let deduction_code = match invoice.direction {
            InvoiceDirection::Input => {
                InvoiceClassifier::deduction_code(invoice.is_deductible, invoice.is_fixed_asset)
            }
            InvoiceDirection::Output => ' ',
        };

        let customs_mark = match (invoice.direction, invoice.tax_category) {
            (InvoiceDirection::Output, TaxCategory::ZeroRated) => invoice
                .customs_clearance
                .map(|clearance| clearance.mark())
                .unwrap_or(' '),
            _ => ' ',
        };

        let mut record = RecordWriter::new();
        record.text(
            FORMAT_CODE,
            Some(Self::format_code(invoice.direction, options.invoice_format)),
        )?;
        record.text(TAX_SERIAL_NUMBER, options.tax_serial_number.as_deref())?;
        record.number(SEQUENCE_NUMBER, u64::from(sequence_number))?;
        record.text(YEAR_MONTH, Some(year_month.as_str()))?;
        record.text(BUYER_TAX_ID, buyer)?;
        record.text(SELLER_TAX_ID, seller)?;
        let invoice_number = normalize_invoice_number(&invoice.invoice_number);
        record.text(INVOICE_NUMBER, Some(invoice_number.as_str()))?;
        record.amount(SALES_AMOUNT, invoice.untaxed_amount)?;
        record.flag(TAX_TYPE, tax_type)?;
        record.amount(TAX_AMOUNT, invoice.tax_amount)?;
        record.flag(DEDUCTION_CODE, deduction_code)?;
        record.text(RESERVED, None)?;
        record.flag(SPECIAL_TAX_RATE, ' ')?;
        record.flag(AGGREGATE_MARK, ' ')?;
        record.flag(CUSTOMS_MARK, customs_mark)?;

        record.finish()
    }
}

/// Strips dashes and whitespace, e.g. "AB-1234 5678" to "AB12345678"
pub fn normalize_invoice_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Right-aligned, zero-padded digits
pub fn pad_numeric(field: &'static str, value: u64, width: usize) -> Result<String> {
    let digits = format!("{:0width$}", value, width = width);
    if digits.len() > width {
        return Err(AppError::FieldOverflow {
            field,
            width,
            value: value.to_string(),
        });
    }
    Ok(digits)
}

/// Left-aligned, space-padded, truncated text; `None` is all spaces
pub fn pad_text(field: &'static str, value: Option<&str>, width: usize) -> Result<String> {
    let value = value.unwrap_or("");
    if !value.is_ascii() {
        return Err(AppError::NonAsciiField {
            field,
            value: value.to_string(),
        });
    }
    let truncated = &value[..value.len().min(width)];
    Ok(format!("{:<width$}", truncated, width = width))
}

/// Whole-unit magnitude of a non-negative amount
fn amount_units(field: &'static str, amount: Decimal, width: usize) -> Result<u64> {
    ensure_non_negative(field, amount)?;
    round_to_unit(amount)
        .to_u64()
        .ok_or_else(|| AppError::FieldOverflow {
            field,
            width,
            value: amount.to_string(),
        })
}

/// Appends slots in layout order and checks each lands where the table says
struct RecordWriter {
    buf: Vec<u8>,
}

impl RecordWriter {
    fn new() -> Self {
        Self {
            buf: Vec::with_capacity(RECORD_LENGTH),
        }
    }

    fn put(&mut self, spec: FieldSpec, rendered: &str) -> Result<()> {
        if self.buf.len() != spec.start || rendered.len() != spec.width {
            return Err(AppError::internal(format!(
                "field '{}' misplaced: offset {} width {}",
                spec.name,
                self.buf.len(),
                rendered.len()
            )));
        }
        self.buf.extend_from_slice(rendered.as_bytes());
        Ok(())
    }

    fn text(&mut self, spec: FieldSpec, value: Option<&str>) -> Result<()> {
        let rendered = pad_text(spec.name, value, spec.width)?;
        self.put(spec, &rendered)
    }

    fn number(&mut self, spec: FieldSpec, value: u64) -> Result<()> {
        let rendered = pad_numeric(spec.name, value, spec.width)?;
        self.put(spec, &rendered)
    }

    fn amount(&mut self, spec: FieldSpec, amount: Decimal) -> Result<()> {
        let units = amount_units(spec.name, amount, spec.width)?;
        self.number(spec, units)
    }

    fn flag(&mut self, spec: FieldSpec, value: char) -> Result<()> {
        let mut buf = [0u8; 4];
        let rendered: &str = value.encode_utf8(&mut buf);
        self.text(spec, Some(rendered))
    }

    fn finish(self) -> Result<MediaRecord> {
        MediaRecord::try_from(self.buf.as_slice()).map_err(|_| {
            AppError::internal(format!(
                "media record is {} bytes, expected {}",
                self.buf.len(),
                RECORD_LENGTH
            ))
        })
    }
}
