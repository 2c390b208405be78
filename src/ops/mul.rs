//! Multiplication.

use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::round::{round_to_digits, truncate_to_max_coefficient};
use crate::rounding::RoundingMode;
use crate::wide::{number_of_digits, U256};

/// `a * b`. The exact 96x96 -> 192-bit product is computed first, then
/// rescaled down to `scale <= 28` (rounding `HALF_EVEN` if the combined
/// scale would exceed it), and finally fitted back into 96 bits.
pub(crate) fn mul(a: &Decimal, b: &Decimal) -> Result<Decimal> {
    let ca = U256::from_u128(a.coefficient());
    let cb = U256::from_u128(b.coefficient());

    let product = ca.checked_mul(&cb).ok_or_else(|| {
        Error::internal("96x96 product overflowed the 256-bit working width")
    })?;

    let combined_scale = a.scale() as i64 + b.scale() as i64;
    let (mut working, mut scale) = if combined_scale > MAX_SCALE as i64 {
        let excess = (combined_scale - MAX_SCALE as i64) as u32;
        let total = number_of_digits(product);
        let target = total as i64 - excess as i64;
        (round_to_digits(product, target, RoundingMode::HalfEven), MAX_SCALE)
    } else {
        (product, combined_scale as u32)
    };

    let (fitted, removed) = truncate_to_max_coefficient(working);
    working = fitted;
    if removed > scale {
        return Err(Error::Overflow(format!(
            "{a} * {b} cannot be represented: result needs more digits than scale {scale} allows",
            a = a, b = b
        )));
    }
    scale -= removed;

    let negative = a.is_sign_negative() != b.is_sign_negative() && !working.is_zero();

    let value = working.to_u128().ok_or_else(|| {
        Error::internal("coefficient fit check passed but to_u128 failed in mul")
    })?;

    Decimal::from_coefficient(value, scale, negative)
}
