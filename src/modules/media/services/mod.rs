pub mod file_builder;
pub mod file_validator;
pub mod record_encoder;

pub use file_builder::MediaFileBuilder;
pub use file_validator::MediaFileValidator;
pub use record_encoder::{MediaRecord, MediaRecordEncoder, RECORD_LENGTH};
