//! Property tests for output/input tax aggregation
//!
//! net_tax = output_tax - input_tax always, refund iff strictly negative,
//! and only taxable sales / deductible purchases contribute.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use twvat401::invoices::{InvoiceDetail, InvoiceDirection};
use twvat401::periods::PeriodCalculator;
use twvat401::taxes::{TaxAggregator, TaxCategory};

fn category_strategy() -> impl Strategy<Value = TaxCategory> {
    prop_oneof![
        Just(TaxCategory::Taxable5),
        Just(TaxCategory::ZeroRated),
        Just(TaxCategory::Exempt),
        Just(TaxCategory::NonTaxable),
    ]
}

fn invoice_strategy(direction: InvoiceDirection) -> impl Strategy<Value = InvoiceDetail> {
    (0u64..10_000_000u64, 0u64..500_000u64, category_strategy(), any::<bool>(), any::<bool>()).prop_map(
        move |(untaxed, tax, category, is_deductible, is_fixed_asset)| InvoiceDetail {
            invoice_id: format!("{}-{}", untaxed, tax),
            invoice_number: "ZZ00000000".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            counterparty_tax_id: None,
            untaxed_amount: Decimal::from(untaxed),
            tax_amount: Decimal::from(tax),
            total_amount: Decimal::from(untaxed + tax),
            tax_category: category,
            is_deductible,
            is_fixed_asset,
            direction,
            customs_clearance: None,
        },
    )
}

proptest! {
    #[test]
    fn test_net_tax_identity(
        sales in prop::collection::vec(invoice_strategy(InvoiceDirection::Output), 0..30),
        purchases in prop::collection::vec(invoice_strategy(InvoiceDirection::Input), 0..30),
    ) {
        let amounts = TaxAggregator::calculate_tax_amounts(&sales, &purchases);

        prop_assert_eq!(amounts.net_tax, amounts.output_tax - amounts.input_tax);
        prop_assert_eq!(amounts.is_refund, amounts.net_tax < Decimal::ZERO);
    }

    #[test]
    fn test_inclusion_rules(
        sales in prop::collection::vec(invoice_strategy(InvoiceDirection::Output), 0..30),
        purchases in prop::collection::vec(invoice_strategy(InvoiceDirection::Input), 0..30),
    ) {
        let amounts = TaxAggregator::calculate_tax_amounts(&sales, &purchases);

        let expected_output: Decimal = sales
            .iter()
            .filter(|i| i.tax_category == TaxCategory::Taxable5)
            .map(|i| i.tax_amount)
            .sum();
        let expected_input: Decimal = purchases
            .iter()
            .filter(|i| i.is_deductible)
            .map(|i| i.tax_amount)
            .sum();

        prop_assert_eq!(amounts.output_tax, expected_output);
        prop_assert_eq!(amounts.input_tax, expected_input);
    }

    #[test]
    fn test_summary_agrees_with_tax_amounts(
        sales in prop::collection::vec(invoice_strategy(InvoiceDirection::Output), 0..20),
        purchases in prop::collection::vec(invoice_strategy(InvoiceDirection::Input), 0..20),
    ) {
        let period = PeriodCalculator::calculate_tax_period(2024, 3).unwrap();
        let all: Vec<InvoiceDetail> = sales.iter().chain(purchases.iter()).cloned().collect();

        let amounts = TaxAggregator::calculate_tax_amounts(&sales, &purchases);
        let summary = TaxAggregator::summarize(&period, "12345678", &all);

        prop_assert_eq!(summary.output_tax, amounts.output_tax);
        prop_assert_eq!(summary.input_tax, amounts.input_tax);
        prop_assert_eq!(summary.net_tax, amounts.net_tax);
        prop_assert_eq!(summary.is_refund, amounts.is_refund);
        prop_assert_eq!(summary.input_tax, summary.purchase_input_tax + summary.fixed_asset_input_tax);
        prop_assert_eq!(summary.output_count, sales.len());
        prop_assert_eq!(summary.input_count, purchases.len());

        let sales_total: Decimal = sales.iter().map(|i| i.untaxed_amount).sum();
        prop_assert_eq!(summary.total_sales_amount(), sales_total);
    }
}

#[test]
fn test_empty_periods_yield_zero() {
    let amounts = TaxAggregator::calculate_tax_amounts(&[], &[]);
    assert_eq!(amounts.output_tax, dec!(0));
    assert_eq!(amounts.input_tax, dec!(0));
    assert_eq!(amounts.net_tax, dec!(0));
    assert!(!amounts.is_refund);
}

#[test]
fn test_summary_splits_purchases() {
    let period = PeriodCalculator::calculate_tax_period(2024, 3).unwrap();
    let base = InvoiceDetail {
        invoice_id: "x".to_string(),
        invoice_number: "XY00000001".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        counterparty_tax_id: Some("04595257".to_string()),
        untaxed_amount: dec!(1000),
        tax_amount: dec!(50),
        total_amount: dec!(1050),
        tax_category: TaxCategory::Taxable5,
        is_deductible: true,
        is_fixed_asset: false,
        direction: InvoiceDirection::Input,
        customs_clearance: None,
    };

    let fixed_asset = InvoiceDetail {
        is_fixed_asset: true,
        untaxed_amount: dec!(20000),
        tax_amount: dec!(1000),
        total_amount: dec!(21000),
        ..base.clone()
    };
    let entertainment = InvoiceDetail {
        is_deductible: false,
        untaxed_amount: dec!(600),
        tax_amount: dec!(30),
        total_amount: dec!(630),
        ..base.clone()
    };
    let export = InvoiceDetail {
        direction: InvoiceDirection::Output,
        tax_category: TaxCategory::ZeroRated,
        untaxed_amount: dec!(5000),
        tax_amount: dec!(0),
        total_amount: dec!(5000),
        ..base.clone()
    };

    let summary = TaxAggregator::summarize(
        &period,
        "12345678",
        &[export, base, fixed_asset, entertainment],
    );

    assert_eq!(summary.zero_rated_sales_amount, dec!(5000));
    assert_eq!(summary.output_tax, dec!(0));
    assert_eq!(summary.purchase_amount, dec!(1000));
    assert_eq!(summary.purchase_input_tax, dec!(50));
    assert_eq!(summary.fixed_asset_purchase_amount, dec!(20000));
    assert_eq!(summary.fixed_asset_input_tax, dec!(1000));
    assert_eq!(summary.non_deductible_purchase_amount, dec!(600));
    assert_eq!(summary.input_tax, dec!(1050));
    assert_eq!(summary.net_tax, dec!(-1050));
    assert!(summary.is_refund);
    assert_eq!(summary.tax_refundable(), dec!(1050));
}
