//! Monetary amount rules
//!
//! Amounts are `rust_decimal::Decimal` in memory and `NUMERIC(10, 2)` in the
//! store. An amount that the column would round or reject is refused up
//! front so a stored amount always reads back unchanged.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ValidationError;

/// Maximum number of fractional digits a stored amount keeps
pub const AMOUNT_SCALE: u32 = 2;

/// Exclusive upper bound imposed by `NUMERIC(10, 2)`
pub const AMOUNT_UPPER_BOUND: Decimal = dec!(100000000);

/// Checks that an amount is positive and fits the amount column
///
/// # Arguments
///
/// * `field` - Field name reported on failure
/// * `amount` - The amount to check
///
/// # Returns
///
/// The amount unchanged, or a `ValidationError` naming `field`
pub fn require_positive_amount(
    field: &'static str,
    amount: Decimal,
) -> Result<Decimal, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::new(
            field,
            format!("must be greater than zero, got {}", amount),
        ));
    }
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(ValidationError::new(
            field,
            format!("must have at most {} decimal places, got {}", AMOUNT_SCALE, amount),
        ));
    }
    if amount >= AMOUNT_UPPER_BOUND {
        return Err(ValidationError::new(
            field,
            format!("must be less than {}, got {}", AMOUNT_UPPER_BOUND, amount),
        ));
    }
    Ok(amount)
}
