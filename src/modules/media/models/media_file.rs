use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{AppError, Result};
use crate::modules::media::models::MediaRecordView;
use crate::modules::media::services::RECORD_LENGTH;

/// Encoded media file plus the statistics gathered while encoding
///
/// `content.len() == record_count * RECORD_LENGTH` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaFileResult {
    #[serde(skip)]
    pub content: Vec<u8>,
    pub record_count: usize,
    pub output_count: usize,
    pub input_count: usize,
    /// Untaxed amount of all sales records
    pub output_amount: Decimal,
    /// Untaxed amount of all purchase records
    pub input_amount: Decimal,
    pub output_tax: Decimal,
    pub input_tax: Decimal,
    pub net_tax: Decimal,
    pub is_refund: bool,
}

impl MediaFileResult {
    /// Content as text; records are pure ASCII
    pub fn content_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.content)
            .map_err(|e| AppError::internal(format!("media content is not text: {}", e)))
    }

    /// Record views in file order
    pub fn records(&self) -> Result<Vec<MediaRecordView<'_>>> {
        self.content
            .chunks(RECORD_LENGTH)
            .map(MediaRecordView::parse)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Outcome of a structural media file check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaFileValidation {
    pub valid: bool,
    /// Complete records found in the content
    pub record_count: usize,
    pub errors: Vec<String>,
}
