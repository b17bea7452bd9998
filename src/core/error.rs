/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the filing core
///
/// Every variant is a deterministic contract violation: the same input
/// always produces the same error, so nothing here is retryable.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AppError {
    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bi-month index or calendar month outside its legal range
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// A NonTaxable invoice reached a step that needs a concrete tax type code
    #[error(
        "NON_TAXABLE invoice has no tax type code{}",
        .invoice_number.as_deref().map(|n| format!(" (invoice {})", n)).unwrap_or_default()
    )]
    NonTaxableCategory { invoice_number: Option<String> },

    /// Monetary field below zero
    #[error("Negative amount in field '{field}': {value}")]
    NegativeAmount { field: &'static str, value: String },

    /// Value does not fit into its fixed-width slot
    #[error("Value for field '{field}' exceeds {width} digits: {value}")]
    FieldOverflow {
        field: &'static str,
        width: usize,
        value: String,
    },

    /// Text field contains characters that are not single-byte ASCII
    #[error("Field '{field}' must be ASCII: {value:?}")]
    NonAsciiField { field: &'static str, value: String },

    /// Malformed unified business number or tax serial number
    #[error("Invalid tax id in '{field}': {value:?}")]
    InvalidTaxId { field: &'static str, value: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Internal invariant broken
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn invalid_period(msg: impl Into<String>) -> Self {
        AppError::InvalidPeriod(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn invalid_tax_id(field: &'static str, value: impl Into<String>) -> Self {
        AppError::InvalidTaxId {
            field,
            value: value.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AppError::NegativeAmount { field, .. }
            | AppError::FieldOverflow { field, .. }
            | AppError::NonAsciiField { field, .. }
            | AppError::InvalidTaxId { field, .. } => Some(field),
            _ => None,
        }
    }
}
