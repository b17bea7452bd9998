pub mod models;
pub mod services;

pub use models::{
    InvoiceFormat, MediaFileOptions, MediaFileResult, MediaFileValidation, MediaRecordView,
};
pub use services::{
    MediaFileBuilder, MediaFileValidator, MediaRecordEncoder, MediaRecord, RECORD_LENGTH,
};
