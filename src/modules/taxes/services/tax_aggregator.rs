use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::modules::invoices::models::{InvoiceDetail, InvoiceDirection};
use crate::modules::periods::models::TaxPeriod;
use crate::modules::reports::models::Form401Summary;
use crate::modules::taxes::models::TaxCategory;

/// Output tax, input tax and the balance between them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAmounts {
    pub output_tax: Decimal,
    pub input_tax: Decimal,
    /// `output_tax - input_tax`
    pub net_tax: Decimal,
    /// `net_tax < 0`; a zero balance is payable, not refundable
    pub is_refund: bool,
}

impl TaxAmounts {
    pub fn new(output_tax: Decimal, input_tax: Decimal) -> Self {
        let net_tax = output_tax - input_tax;
        Self {
            output_tax,
            input_tax,
            net_tax,
            is_refund: net_tax < Decimal::ZERO,
        }
    }
}

/// Running counts and sums over a sequence of invoices
///
/// Shared by the aggregator and the media file builder so both apply the
/// same inclusion rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTotals {
    pub output_count: usize,
    pub input_count: usize,
    /// Untaxed amount over all sales
    pub output_amount: Decimal,
    /// Untaxed amount over all purchases
    pub input_amount: Decimal,
    pub output_tax: Decimal,
    pub input_tax: Decimal,
}

impl TaxTotals {
    pub fn add(&mut self, invoice: &InvoiceDetail) {
        match invoice.direction {
            InvoiceDirection::Output => {
                self.output_count += 1;
                self.output_amount += invoice.untaxed_amount;
                self.output_tax += TaxAggregator::output_tax_of(invoice);
            }
            InvoiceDirection::Input => {
                self.input_count += 1;
                self.input_amount += invoice.untaxed_amount;
                self.input_tax += TaxAggregator::input_tax_of(invoice);
            }
        }
    }

    pub fn amounts(&self) -> TaxAmounts {
        TaxAmounts::new(self.output_tax, self.input_tax)
    }
}

/// Aggregates classified invoices into filing totals
///
/// Amounts are summed as given; per-invoice rounding is the caller's job.
pub struct TaxAggregator;

impl TaxAggregator {
    /// Output tax contributed by one sales invoice
    ///
    /// Only `Taxable5` counts, filtered by category rather than trusting
    /// the tax amount of other categories to be zero.
    pub fn output_tax_of(invoice: &InvoiceDetail) -> Decimal {
        if invoice.tax_category == TaxCategory::Taxable5 {
            invoice.tax_amount
        } else {
            Decimal::ZERO
        }
    }

    /// Input tax credited for one purchase invoice
    pub fn input_tax_of(invoice: &InvoiceDetail) -> Decimal {
        if invoice.is_deductible {
            invoice.tax_amount
        } else {
            Decimal::ZERO
        }
    }

    /// Output tax, deductible input tax and net tax
    pub fn calculate_tax_amounts(
        sales_invoices: &[InvoiceDetail],
        purchase_invoices: &[InvoiceDetail],
    ) -> TaxAmounts {
        let output_tax: Decimal = sales_invoices.iter().map(Self::output_tax_of).sum();
        let input_tax: Decimal = purchase_invoices.iter().map(Self::input_tax_of).sum();

        TaxAmounts::new(output_tax, input_tax)
    }

    /// Form 401 figures for one period
    ///
    /// Sales are split by category, deductible purchases by fixed-asset
    /// flag. Sales dated outside the period are included but logged, since
    /// the invoice retrieval is expected to have filtered them already.
    pub fn summarize(
        period: &TaxPeriod,
        tax_registration_number: &str,
        invoices: &[InvoiceDetail],
    ) -> Form401Summary {
        let mut summary = Form401Summary::empty(period.clone(), tax_registration_number);
        let mut totals = TaxTotals::default();

        for invoice in invoices {
            totals.add(invoice);

            match invoice.direction {
                InvoiceDirection::Output => {
                    if !period.contains(invoice.date) {
                        warn!(
                            "Sales invoice {} dated {} is outside period {}..{}",
                            invoice.invoice_number, invoice.date, period.start_date, period.end_date
                        );
                    }

                    match invoice.tax_category {
                        TaxCategory::Taxable5 => {
                            summary.taxable_sales_amount += invoice.untaxed_amount
                        }
                        TaxCategory::ZeroRated => {
                            summary.zero_rated_sales_amount += invoice.untaxed_amount
                        }
                        TaxCategory::Exempt => summary.exempt_sales_amount += invoice.untaxed_amount,
                        TaxCategory::NonTaxable => {
                            summary.unclassified_sales_amount += invoice.untaxed_amount
                        }
                    }
                }
                InvoiceDirection::Input => {
                    if !invoice.is_deductible {
                        summary.non_deductible_purchase_amount += invoice.untaxed_amount;
                    } else if invoice.is_fixed_asset {
                        summary.fixed_asset_purchase_amount += invoice.untaxed_amount;
                        summary.fixed_asset_input_tax += invoice.tax_amount;
                    } else {
                        summary.purchase_amount += invoice.untaxed_amount;
                        summary.purchase_input_tax += invoice.tax_amount;
                    }
                }
            }
        }

        let amounts = totals.amounts();
        summary.output_tax = amounts.output_tax;
        summary.input_tax = amounts.input_tax;
        summary.net_tax = amounts.net_tax;
        summary.is_refund = amounts.is_refund;
        summary.output_count = totals.output_count;
        summary.input_count = totals.input_count;

        debug!(
            "Form 401 summary for {}: output_tax={}, input_tax={}, net_tax={}",
            period.roc_year_month, summary.output_tax, summary.input_tax, summary.net_tax
        );

        summary
    }
}
