//! Taiwan business tax (Form 401) filing core
//!
//! Turns a company's classified sales and purchase invoices for a
//! bi-monthly period into the Form 401 summary and the fixed-width media
//! file accepted by the tax authority. Storage, transport and rendering
//! belong to the calling application.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::media;
pub use modules::periods;
pub use modules::reports;
pub use modules::taxes;

pub use crate::core::{AppError, Result};
