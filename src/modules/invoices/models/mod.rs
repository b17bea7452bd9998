mod invoice_detail;
mod invoice_record;

pub use invoice_detail::{CustomsClearance, InvoiceDetail, InvoiceDirection};
pub use invoice_record::InvoiceRecord;
