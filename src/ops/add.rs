//! Addition and subtraction.

use crate::decimal::Decimal;
use crate::error::{Error, Result};
use crate::round::truncate_to_max_coefficient;
use crate::wide::{pow10, U256};

/// `a + b`. Subtraction is addition of the negated right-hand side.
pub(crate) fn add(a: &Decimal, b: &Decimal) -> Result<Decimal> {
    let scale = a.scale().max(b.scale());

    let ca = align(a.coefficient(), a.scale(), scale)?;
    let cb = align(b.coefficient(), b.scale(), scale)?;

    let (magnitude, negative) = if a.is_sign_negative() == b.is_sign_negative() {
        let sum = ca.checked_add(&cb).ok_or_else(|| {
            Error::Overflow("sum of aligned coefficients overflowed the working width".to_string())
        })?;
        (sum, a.is_sign_negative())
    } else if ca >= cb {
        (ca.checked_sub(&cb).expect("ca >= cb"), a.is_sign_negative())
    } else {
        (cb.checked_sub(&ca).expect("cb > ca"), b.is_sign_negative())
    };

    let negative = negative && !magnitude.is_zero();

    let (fitted, removed) = truncate_to_max_coefficient(magnitude);
    if removed > scale {
        return Err(Error::Overflow(format!(
            "{a} + {b} cannot be represented: result needs more digits than scale {scale} allows",
            a = a, b = b
        )));
    }
    let final_scale = scale - removed;

    let value = fitted.to_u128().ok_or_else(|| {
        Error::internal("coefficient fit check passed but to_u128 failed in add")
    })?;

    Decimal::from_coefficient(value, final_scale, negative)
}

/// Scales `coefficient` (currently at `from_scale`) up to `to_scale` by
/// multiplying by the appropriate power of ten.
fn align(coefficient: u128, from_scale: u32, to_scale: u32) -> Result<U256> {
    let wide = U256::from_u128(coefficient);
    if from_scale == to_scale {
        return Ok(wide);
    }
    let factor = pow10(to_scale - from_scale)
        .ok_or_else(|| Error::internal("scale alignment exponent exceeded the pow10 cache"))?;
    wide.checked_mul(&factor)
        .ok_or_else(|| Error::internal("scale alignment overflowed the working width"))
}
