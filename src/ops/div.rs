//! Division.
//!
//! The dividend is prescaled well past the target precision before the long
//! division runs, so that a single half-even correction against the
//! remainder at the end is enough to get a correctly-rounded result; no
//! iterative refinement is needed the way it is for square root. When the
//! division terminates exactly (zero remainder), trailing zeros are then
//! stripped back down to the result's natural scale, matching how a real
//! `DECIMAL` division reports `10 / 4` as `2.5`, not `2.5000...0`.

use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::round::fit_wide_coefficient;
use crate::wide::{pow10, U512};

/// `a / b`.
pub(crate) fn div(a: &Decimal, b: &Decimal) -> Result<Decimal> {
    if b.is_zero() {
        return if a.is_zero() {
            Err(Error::InvalidOperation("0 / 0 is undefined".to_string()))
        } else {
            Err(Error::DivisionByZero(format!("{a} / {b}", a = a, b = b)))
        };
    }
    if a.is_zero() {
        return Ok(Decimal::ZERO);
    }

    // Target the maximum scale up front; the dividend is prescaled by
    // whatever extra power of ten is needed to land there before dividing.
    let working_scale = a.scale() as i64 - b.scale() as i64;
    let shift = (MAX_SCALE as i64 - working_scale) as u32;

    let numerator = U512::from_u128(a.coefficient())
        .checked_mul(&pow10(shift).ok_or_else(|| {
            Error::internal("division prescale exponent exceeded the pow10 cache")
        })?.widen::<8>())
        .ok_or_else(|| Error::internal("division prescale overflowed the 512-bit working width"))?;
    let divisor = U512::from_u128(b.coefficient());

    let (quotient, remainder) = numerator.divmod(&divisor);
    let exact = remainder.is_zero();

    let rounded = if exact {
        quotient
    } else {
        let twice = remainder
            .checked_mul_u64(2)
            .ok_or_else(|| Error::internal("2 * remainder overflowed the 512-bit working width"))?;
        match twice.cmp(&divisor) {
            std::cmp::Ordering::Greater => quotient
                .checked_add(&U512::from_u64(1))
                .ok_or_else(|| Error::internal("rounding the quotient up overflowed"))?,
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Equal => {
                if quotient.divmod_u64(2).1 == 1 {
                    quotient
                        .checked_add(&U512::from_u64(1))
                        .ok_or_else(|| Error::internal("rounding the quotient up overflowed"))?
                } else {
                    quotient
                }
            }
        }
    };

    let (mut value, mut scale) = fit_wide_coefficient(rounded, MAX_SCALE)?;

    // An exact quotient may still carry trailing zeros picked up from the
    // prescale; strip them back down to the natural terminating scale.
    if exact {
        while scale > 0 && value % 10 == 0 {
            value /= 10;
            scale -= 1;
        }
    }

    let negative = a.is_sign_negative() != b.is_sign_negative() && value != 0;

    Decimal::from_coefficient(value, scale, negative)
}
