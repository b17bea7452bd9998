// Field table of the 81-byte Form 401 media record.
//
// Positions are 0-based byte offsets. Changing any width means changing
// RECORD_LENGTH together with this table.

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::media::services::RECORD_LENGTH;

/// One fixed-width slot of a media record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub start: usize,
    pub width: usize,
}

impl FieldSpec {
    const fn new(name: &'static str, start: usize, width: usize) -> Self {
        Self { name, start, width }
    }

    pub const fn end(&self) -> usize {
        self.start + self.width
    }
}

pub const FORMAT_CODE: FieldSpec = FieldSpec::new("format_code", 0, 2);
pub const TAX_SERIAL_NUMBER: FieldSpec = FieldSpec::new("tax_serial_number", 2, 9);
pub const SEQUENCE_NUMBER: FieldSpec = FieldSpec::new("sequence_number", 11, 7);
pub const YEAR_MONTH: FieldSpec = FieldSpec::new("year_month", 18, 5);
pub const BUYER_TAX_ID: FieldSpec = FieldSpec::new("buyer_tax_id", 23, 8);
pub const SELLER_TAX_ID: FieldSpec = FieldSpec::new("seller_tax_id", 31, 8);
pub const INVOICE_NUMBER: FieldSpec = FieldSpec::new("invoice_number", 39, 10);
pub const SALES_AMOUNT: FieldSpec = FieldSpec::new("sales_amount", 49, 12);
pub const TAX_TYPE: FieldSpec = FieldSpec::new("tax_type", 61, 1);
pub const TAX_AMOUNT: FieldSpec = FieldSpec::new("tax_amount", 62, 10);
pub const DEDUCTION_CODE: FieldSpec = FieldSpec::new("deduction_code", 72, 1);
pub const RESERVED: FieldSpec = FieldSpec::new("reserved", 73, 5);
pub const SPECIAL_TAX_RATE: FieldSpec = FieldSpec::new("special_tax_rate", 78, 1);
pub const AGGREGATE_MARK: FieldSpec = FieldSpec::new("aggregate_mark", 79, 1);
pub const CUSTOMS_MARK: FieldSpec = FieldSpec::new("customs_mark", 80, 1);

/// Every slot of the record in byte order
pub const RECORD_LAYOUT: [FieldSpec; 15] = [
    FORMAT_CODE,
    TAX_SERIAL_NUMBER,
    SEQUENCE_NUMBER,
    YEAR_MONTH,
    BUYER_TAX_ID,
    SELLER_TAX_ID,
    INVOICE_NUMBER,
    SALES_AMOUNT,
    TAX_TYPE,
    TAX_AMOUNT,
    DEDUCTION_CODE,
    RESERVED,
    SPECIAL_TAX_RATE,
    AGGREGATE_MARK,
    CUSTOMS_MARK,
];

/// Read-only view over one encoded record
///
/// Used to inspect re-imported media files. Parsing checks length and
/// character set only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaRecordView<'a> {
    bytes: &'a [u8],
}

impl<'a> MediaRecordView<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() != RECORD_LENGTH {
            return Err(AppError::validation(format!(
                "media record must be {} bytes, got {}",
                RECORD_LENGTH,
                bytes.len()
            )));
        }
        if !bytes.is_ascii() {
            return Err(AppError::validation("media record contains non-ASCII bytes"));
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Raw slot content, padding included
    pub fn field(&self, spec: FieldSpec) -> &'a str {
        std::str::from_utf8(&self.bytes[spec.start..spec.end()]).unwrap_or_default()
    }

    pub fn format_code(&self) -> &'a str {
        self.field(FORMAT_CODE)
    }

    pub fn sequence_number(&self) -> Result<u32> {
        parse_number(SEQUENCE_NUMBER, self.field(SEQUENCE_NUMBER))
    }

    pub fn year_month(&self) -> &'a str {
        self.field(YEAR_MONTH)
    }

    pub fn buyer_tax_id(&self) -> Option<&'a str> {
        non_blank(self.field(BUYER_TAX_ID))
    }

    pub fn seller_tax_id(&self) -> Option<&'a str> {
        non_blank(self.field(SELLER_TAX_ID))
    }

    pub fn invoice_number(&self) -> &'a str {
        self.field(INVOICE_NUMBER).trim_end()
    }

    pub fn sales_amount(&self) -> Result<Decimal> {
        parse_number::<u64>(SALES_AMOUNT, self.field(SALES_AMOUNT)).map(Decimal::from)
    }

    pub fn tax_type_code(&self) -> char {
        char::from(self.bytes[TAX_TYPE.start])
    }

    pub fn tax_amount(&self) -> Result<Decimal> {
        parse_number::<u64>(TAX_AMOUNT, self.field(TAX_AMOUNT)).map(Decimal::from)
    }

    /// `None` for sales records, which leave the slot blank
    pub fn deduction_code(&self) -> Option<char> {
        match self.bytes[DEDUCTION_CODE.start] {
            b' ' => None,
            b => Some(char::from(b)),
        }
    }

    pub fn customs_mark(&self) -> Option<char> {
        match self.bytes[CUSTOMS_MARK.start] {
            b' ' => None,
            b => Some(char::from(b)),
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_number<T: std::str::FromStr>(spec: FieldSpec, raw: &str) -> Result<T> {
    raw.parse::<T>().map_err(|_| {
        AppError::validation(format!("field '{}' is not numeric: {:?}", spec.name, raw))
    })
}
