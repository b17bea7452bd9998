pub mod tax_category;
pub mod tax_code;

pub use tax_category::TaxCategory;
pub use tax_code::{TaxCode, TaxType};
