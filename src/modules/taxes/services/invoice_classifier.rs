use crate::core::{AppError, Result};
use crate::modules::taxes::models::{TaxCategory, TaxCode, TaxType};

/// Maps resolved tax codes onto filing categories and codes
///
/// Pure: the tax code is looked up by the caller and passed in.
pub struct InvoiceClassifier;

impl InvoiceClassifier {
    /// Statutory category of an invoice
    ///
    /// An invoice without a tax code is `NonTaxable`; no guess is made.
    pub fn determine_tax_category(tax_code: Option<&TaxCode>) -> TaxCategory {
        match tax_code.map(|code| code.tax_type) {
            None => TaxCategory::NonTaxable,
            Some(TaxType::Taxable) => TaxCategory::Taxable5,
            Some(TaxType::ZeroRated) => TaxCategory::ZeroRated,
            Some(TaxType::Exempt) => TaxCategory::Exempt,
        }
    }

    /// Whether a purchase may be credited as input tax
    ///
    /// Unclassified purchases count as deductible until flagged otherwise.
    pub fn is_deductible(tax_code: Option<&TaxCode>) -> bool {
        tax_code.map_or(true, |code| code.is_deductible)
    }

    /// Deduction code of a purchase record
    ///
    /// | deductible | fixed asset | code |
    /// |---|---|---|
    /// | yes | no  | 1 |
    /// | no  | no  | 2 |
    /// | yes | yes | 3 |
    /// | no  | yes | 4 |
    pub fn deduction_code(is_deductible: bool, is_fixed_asset: bool) -> char {
        match (is_deductible, is_fixed_asset) {
            (true, false) => '1',
            (false, false) => '2',
            (true, true) => '3',
            (false, true) => '4',
        }
    }

    /// One-character tax type code of the media record
    ///
    /// `NonTaxable` has no code. Reaching this with it is a caller bug.
    pub fn tax_type_code(category: TaxCategory) -> Result<char> {
        match category {
            TaxCategory::Taxable5 => Ok('1'),
            TaxCategory::ZeroRated => Ok('2'),
            TaxCategory::Exempt => Ok('3'),
            TaxCategory::NonTaxable => Err(AppError::NonTaxableCategory {
                invoice_number: None,
            }),
        }
    }
}
