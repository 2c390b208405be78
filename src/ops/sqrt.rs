//! Square root: Newton-Raphson integer square root on a prescaled working
//! coefficient, with an exact comparison-based rounding step rather than
//! carrying extra guard digits.

use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::round::fit_wide_coefficient;
use crate::wide::{pow10, U512};
use std::cmp::Ordering;

/// `sqrt(d)`. Negative operands (other than zero) have no real square root.
pub(crate) fn sqrt(d: &Decimal) -> Result<Decimal> {
    if d.is_negative() {
        return Err(Error::InvalidOperation(format!("sqrt of negative value {d}")));
    }
    if d.is_zero() {
        return Ok(Decimal::ZERO);
    }

    // Prescale so the target result lands at MAX_SCALE: sqrt(c * 10^es) with
    // es = 2*MAX_SCALE - s gives an integer coefficient at scale MAX_SCALE.
    // s <= 28 keeps es in [28, 56], which can need up to ~283 working bits
    // in the worst case (c close to 2^96-1 at s = 0) -- hence U512.
    let s = d.scale();
    let es = 2 * MAX_SCALE - s;
    let working = U512::from_u128(d.coefficient())
        .checked_mul(&pow10(es).ok_or_else(|| {
            Error::internal("sqrt prescale exponent exceeded the pow10 cache")
        })?.widen::<8>())
        .ok_or_else(|| Error::internal("sqrt prescale overflowed the 512-bit working width"))?;

    let floor_root = integer_sqrt(working);
    let rounded = round_to_nearest(working, floor_root)?;

    let (value, scale) = fit_wide_coefficient(rounded, MAX_SCALE)?;
    Decimal::from_coefficient(value, scale, false)
}

/// Newton-Raphson integer square root: `floor(sqrt(v))`.
fn integer_sqrt(v: U512) -> U512 {
    if v.is_zero() {
        return U512::ZERO;
    }
    let bits = v.number_of_bits();
    let mut x = U512::from_u64(1).shl((bits + 1) / 2);
    loop {
        let quotient = v.divmod(&x).0;
        let next = x.average_with(&quotient);
        if next >= x {
            break;
        }
        x = next;
    }
    // Newton's method can settle one step above the true floor when the
    // initial guess undershoots; nudge down until x^2 <= v.
    while x.checked_mul(&x).map(|sq| sq > v).unwrap_or(true) {
        x = x.checked_sub(&U512::from_u64(1)).expect("floor sqrt of a nonzero value is >= 1");
    }
    x
}

/// Decides between `x` (the floor root) and `x + 1` by comparing `4*v`
/// against `(2x+1)^2`, which is exact integer arithmetic equivalent to
/// comparing `v` against the halfway point `(x + 0.5)^2`. Ties round to the
/// even candidate.
fn round_to_nearest(v: U512, x: U512) -> Result<U512> {
    let four_v = v
        .checked_mul_u64(4)
        .ok_or_else(|| Error::internal("4 * working value overflowed the 512-bit width"))?;
    let two_x_plus_1 = x
        .checked_mul_u64(2)
        .and_then(|t| t.checked_add(&U512::from_u64(1)))
        .ok_or_else(|| Error::internal("2x + 1 overflowed the 512-bit width"))?;
    let midpoint_sq = two_x_plus_1
        .checked_mul(&two_x_plus_1)
        .ok_or_else(|| Error::internal("(2x+1)^2 overflowed the 512-bit width"))?;

    Ok(match four_v.cmp(&midpoint_sq) {
        Ordering::Less => x,
        Ordering::Greater => {
            x.checked_add(&U512::from_u64(1)).expect("rounding up stays within U512")
        }
        Ordering::Equal => {
            if x.divmod_u64(2).1 == 1 {
                x.checked_add(&U512::from_u64(1)).expect("rounding up stays within U512")
            } else {
                x
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    #[test]
    fn sqrt_of_perfect_square() {
        let d = parse("4").unwrap();
        let result = sqrt(&d).unwrap();
        assert_eq!(result.to_string(), "2.0000000000000000000000000000");
    }

    #[test]
    fn sqrt_of_zero() {
        assert!(sqrt(&Decimal::ZERO).unwrap().is_zero());
    }

    #[test]
    fn sqrt_of_negative_is_invalid() {
        let d = parse("-1").unwrap();
        assert!(matches!(sqrt(&d), Err(Error::InvalidOperation(_))));
    }

    #[test]
    fn sqrt_of_two_is_approximately_right() {
        let d = parse("2").unwrap();
        let result = sqrt(&d).unwrap();
        assert!(result.to_string().starts_with("1.4142135623730950488016887242"));
    }

    #[test]
    fn sqrt_of_large_perfect_square() {
        let d = parse("1000000").unwrap();
        let result = sqrt(&d).unwrap();
        assert_eq!(result.to_string(), "1000.0000000000000000000000000");
    }
}
