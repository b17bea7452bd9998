//! Integration tests for media file generation and validation
//!
//! Covers the builder's length invariant, the validator round trip, and the
//! single-sale reference scenario.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use twvat401::invoices::{InvoiceDetail, InvoiceDirection};
use twvat401::media::{
    InvoiceFormat, MediaFileBuilder, MediaFileOptions, MediaFileValidator, RECORD_LENGTH,
};
use twvat401::taxes::TaxCategory;

fn options() -> MediaFileOptions {
    MediaFileOptions::new("12345678", 2024, 1, InvoiceFormat::EInvoice)
}

fn sale(untaxed: Decimal, tax: Decimal) -> InvoiceDetail {
    InvoiceDetail {
        invoice_id: "sale-1".to_string(),
        invoice_number: "AB-12345678".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        counterparty_tax_id: Some("87654321".to_string()),
        untaxed_amount: untaxed,
        tax_amount: tax,
        total_amount: untaxed + tax,
        tax_category: TaxCategory::Taxable5,
        is_deductible: true,
        is_fixed_asset: false,
        direction: InvoiceDirection::Output,
        customs_clearance: None,
    }
}

#[test]
fn test_single_sales_e_invoice_scenario() {
    let result = MediaFileBuilder::generate_media_file(&[sale(dec!(10000), dec!(500))], &options())
        .unwrap();

    let line = result.content_str().unwrap();
    assert_eq!(line.len(), 81);
    assert!(line.starts_with("35"));
    assert!(line.contains("000000010000"));
    assert!(line.contains("87654321"));

    assert_eq!(result.record_count, 1);
    assert_eq!(result.output_count, 1);
    assert_eq!(result.input_count, 0);
    assert_eq!(result.output_amount, dec!(10000));
    assert_eq!(result.output_tax, dec!(500));
    assert_eq!(result.input_tax, dec!(0));
    assert_eq!(result.net_tax, dec!(500));
    assert!(!result.is_refund);
}

#[test]
fn test_empty_content_validates() {
    let validation = MediaFileValidator::validate_media_file(b"");
    assert!(validation.valid);
    assert_eq!(validation.record_count, 0);

    let empty = MediaFileBuilder::generate_media_file(&[], &options()).unwrap();
    assert!(MediaFileValidator::validate_media_file(&empty.content).valid);
}

#[test]
fn test_truncated_file_is_rejected() {
    let invoices = vec![sale(dec!(100), dec!(5)), sale(dec!(200), dec!(10))];
    let result = MediaFileBuilder::generate_media_file(&invoices, &options()).unwrap();

    let truncated = &result.content[..result.content.len() - 1];
    let validation = MediaFileValidator::validate_media_file(truncated);
    assert!(!validation.valid);
    assert_eq!(validation.record_count, 1);
    assert!(!validation.errors.is_empty());
}

#[test]
fn test_reimported_records_match_totals() {
    let mut purchase = sale(dec!(4000), dec!(200));
    purchase.direction = InvoiceDirection::Input;
    purchase.invoice_number = "CD-00000001".to_string();

    let invoices = vec![sale(dec!(10000), dec!(500)), purchase];
    let result = MediaFileBuilder::generate_media_file(&invoices, &options()).unwrap();

    let records = MediaFileValidator::records(&result.content).unwrap();
    assert_eq!(records.len(), 2);

    let sales_total: Decimal = records
        .iter()
        .filter(|r| r.format_code() == "35")
        .map(|r| r.sales_amount().unwrap())
        .sum();
    let purchase_tax: Decimal = records
        .iter()
        .filter(|r| r.format_code() == "25")
        .map(|r| r.tax_amount().unwrap())
        .sum();

    assert_eq!(sales_total, result.output_amount);
    assert_eq!(purchase_tax, result.input_tax);
    assert_eq!(result.net_tax, dec!(300));
}

#[test]
fn test_summary_serializes_without_content() {
    let result = MediaFileBuilder::generate_media_file(&[sale(dec!(10000), dec!(500))], &options())
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("content").is_none());
    assert_eq!(json["record_count"], 1);
    assert_eq!(json["net_tax"], "500");
    assert_eq!(json["is_refund"], false);
}

proptest! {
    #[test]
    fn test_content_length_invariant(
        amounts in prop::collection::vec((0u64..1_000_000u64, 0u64..50_000u64, any::<bool>()), 0..60)
    ) {
        let invoices: Vec<InvoiceDetail> = amounts
            .iter()
            .map(|(untaxed, tax, is_sale)| {
                let mut invoice = sale(Decimal::from(*untaxed), Decimal::from(*tax));
                if !is_sale {
                    invoice.direction = InvoiceDirection::Input;
                }
                invoice
            })
            .collect();

        let result = MediaFileBuilder::generate_media_file(&invoices, &options()).unwrap();
        prop_assert_eq!(result.record_count, invoices.len());
        prop_assert_eq!(result.content.len(), result.record_count * RECORD_LENGTH);
        prop_assert_eq!(result.output_count + result.input_count, result.record_count);
        prop_assert_eq!(result.net_tax, result.output_tax - result.input_tax);

        let validation = MediaFileValidator::validate_media_file(&result.content);
        prop_assert!(validation.valid);
        prop_assert_eq!(validation.record_count, invoices.len());
    }
}
