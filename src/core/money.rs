use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::error::{AppError, Result};

/// New Taiwan dollar amounts are filed in whole units
pub const TWD_SCALE: u32 = 0;

/// Rounds an amount to whole currency units, half away from zero
///
/// 10.5 becomes 11 and 10.49 becomes 10. Banker's rounding is not used
/// because filed amounts follow the conventional half-up rule.
pub fn round_to_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(TWD_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rejects negative amounts, naming the field in the error
pub fn ensure_non_negative(field: &'static str, amount: Decimal) -> Result<Decimal> {
    if amount < Decimal::ZERO {
        return Err(AppError::NegativeAmount {
            field,
            value: amount.to_string(),
        });
    }
    Ok(amount)
}

/// Formats an amount for display, e.g. "TWD 10500"
pub fn format_twd(amount: Decimal) -> String {
    format!("TWD {}", round_to_unit(amount))
}
