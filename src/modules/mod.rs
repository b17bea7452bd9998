pub mod invoices;
pub mod media;
pub mod periods;
pub mod reports;
pub mod taxes;
