use crate::core::{AppError, Result};
use crate::modules::media::models::{MediaFileValidation, MediaRecordView};
use crate::modules::media::services::record_encoder::RECORD_LENGTH;

/// Structural checks on media file content
///
/// Only the length is verified; field contents are not re-checked.
pub struct MediaFileValidator;

impl MediaFileValidator {
    /// Empty content is a valid file of zero records
    pub fn validate_media_file(content: &[u8]) -> MediaFileValidation {
        let record_count = content.len() / RECORD_LENGTH;
        let remainder = content.len() % RECORD_LENGTH;

        let mut errors = Vec::new();
        if remainder != 0 {
            errors.push(format!(
                "content length {} is not a multiple of the record length {} ({} trailing bytes after {} records)",
                content.len(),
                RECORD_LENGTH,
                remainder,
                record_count
            ));
        }

        MediaFileValidation {
            valid: errors.is_empty(),
            record_count,
            errors,
        }
    }

    /// Split validated content into record views
    pub fn records(content: &[u8]) -> Result<Vec<MediaRecordView<'_>>> {
        let validation = Self::validate_media_file(content);
        if !validation.valid {
            return Err(AppError::validation(validation.errors.join("; ")));
        }

        content
            .chunks(RECORD_LENGTH)
            .map(MediaRecordView::parse)
            .collect()
    }
}
