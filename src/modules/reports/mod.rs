pub mod models;
pub mod services;

pub use models::Form401Summary;
pub use services::{FilingPackage, FilingService};
