mod media_file;
mod media_options;
pub mod media_record;

pub use media_file::{MediaFileResult, MediaFileValidation};
pub use media_options::{InvoiceFormat, MediaFileOptions};
pub use media_record::{FieldSpec, MediaRecordView, RECORD_LAYOUT};
