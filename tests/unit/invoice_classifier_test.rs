//! Classification totality and the fixed code tables

use twvat401::taxes::{InvoiceClassifier, TaxCategory, TaxCode, TaxType};
use twvat401::AppError;

#[test]
fn test_absent_tax_code_is_non_taxable_and_deductible() {
    assert_eq!(
        InvoiceClassifier::determine_tax_category(None),
        TaxCategory::NonTaxable
    );
    assert!(InvoiceClassifier::is_deductible(None));
}

#[test]
fn test_each_tax_type_maps_to_a_distinct_category() {
    let types = [TaxType::Taxable, TaxType::ZeroRated, TaxType::Exempt];
    let categories: Vec<TaxCategory> = types
        .iter()
        .map(|t| InvoiceClassifier::determine_tax_category(Some(&TaxCode::new("C", *t, true))))
        .collect();

    assert_eq!(
        categories,
        vec![TaxCategory::Taxable5, TaxCategory::ZeroRated, TaxCategory::Exempt]
    );
    assert!(!categories.contains(&TaxCategory::NonTaxable));
}

#[test]
fn test_category_does_not_depend_on_deductibility() {
    for tax_type in [TaxType::Taxable, TaxType::ZeroRated, TaxType::Exempt] {
        let deductible = TaxCode::new("A", tax_type, true);
        let non_deductible = TaxCode::new("B", tax_type, false);
        assert_eq!(
            InvoiceClassifier::determine_tax_category(Some(&deductible)),
            InvoiceClassifier::determine_tax_category(Some(&non_deductible)),
        );
        assert!(InvoiceClassifier::is_deductible(Some(&deductible)));
        assert!(!InvoiceClassifier::is_deductible(Some(&non_deductible)));
    }
}

#[test]
fn test_deduction_code_table() {
    let table = [
        ((true, false), '1'),
        ((false, false), '2'),
        ((true, true), '3'),
        ((false, true), '4'),
    ];
    for ((is_deductible, is_fixed_asset), expected) in table {
        assert_eq!(
            InvoiceClassifier::deduction_code(is_deductible, is_fixed_asset),
            expected,
            "deductible={} fixed_asset={}",
            is_deductible,
            is_fixed_asset
        );
    }
}

#[test]
fn test_tax_type_codes() {
    assert_eq!(InvoiceClassifier::tax_type_code(TaxCategory::Taxable5), Ok('1'));
    assert_eq!(InvoiceClassifier::tax_type_code(TaxCategory::ZeroRated), Ok('2'));
    assert_eq!(InvoiceClassifier::tax_type_code(TaxCategory::Exempt), Ok('3'));
    assert!(matches!(
        InvoiceClassifier::tax_type_code(TaxCategory::NonTaxable),
        Err(AppError::NonTaxableCategory { .. })
    ));
}
