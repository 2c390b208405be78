//! Value-based comparison, `round`/`truncate`, and `floor`/`ceil`. Two
//! `Decimal`s compare equal whenever they denote the same number,
//! regardless of scale (`1.0 == 1.00`) or the sign bit on a zero
//! (`0 == -0`).

use crate::decimal::{Decimal, MAX_SCALE};
use crate::error::{Error, Result};
use crate::round::round_to_digits;
use crate::rounding::RoundingMode;
use crate::wide::{number_of_digits, pow10, U256};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Aligns both coefficients to the larger of the two scales, for a
/// value-based comparison or subtraction.
fn aligned(a: &Decimal, b: &Decimal) -> (U256, U256) {
    let scale = a.scale().max(b.scale());
    let grow = |c: u128, from: u32| -> U256 {
        let wide = U256::from_u128(c);
        if from == scale {
            wide
        } else {
            let factor = pow10(scale - from).expect("scale difference stays within the pow10 cache");
            wide.checked_mul(&factor).expect("aligning two valid coefficients cannot overflow U256")
        }
    };
    (grow(a.coefficient(), a.scale()), grow(b.coefficient(), b.scale()))
}

fn signed_cmp(a: &Decimal, b: &Decimal) -> Ordering {
    if a.is_zero() && b.is_zero() {
        return Ordering::Equal;
    }
    match (a.is_sign_negative(), b.is_sign_negative()) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => {
            let (ca, cb) = aligned(a, b);
            ca.cmp(&cb)
        }
        (true, true) => {
            let (ca, cb) = aligned(a, b);
            ca.cmp(&cb).reverse()
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        signed_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(signed_cmp(self, other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        signed_cmp(self, other)
    }
}

impl Hash for Decimal {
    /// Consistent with `Eq`: two decimals that compare equal hash equal,
    /// even at different scales, by hashing the value's canonical
    /// (coefficient, scale-normalized) form rather than the raw bits.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut coefficient = self.coefficient();
        let mut scale = self.scale();
        while scale > 0 && coefficient % 10 == 0 {
            coefficient /= 10;
            scale -= 1;
        }
        coefficient.hash(state);
        scale.hash(state);
        (!self.is_zero() && self.is_sign_negative()).hash(state);
    }
}

impl Decimal {
    /// Rounds to `digits` places right of the decimal point, per `mode`,
    /// returning a `Decimal` whose scale is exactly `digits`. `digits` must
    /// be in `0..=28`. If `digits` is larger than the current scale, the
    /// coefficient is grown (multiplied by the appropriate power of ten)
    /// rather than left alone, so `round` never silently leaves the scale
    /// short of what was asked for.
    ///
    /// Removing digits can only ever shrink or carry within the original
    /// coefficient's digit count (`9.99 -> 10.0` at one decimal place is a
    /// magnitude change, not a scale change), so shrinking the scale always
    /// fits the 96-bit envelope that `self` already satisfied.
    pub fn round(&self, digits: u32, mode: RoundingMode) -> Result<Decimal> {
        if digits > MAX_SCALE {
            return Err(Error::InvalidOperation(format!(
                "round target {digits} exceeds the maximum scale of {MAX_SCALE}"
            )));
        }
        if digits > self.scale() {
            let growth = digits - self.scale();
            let overflow = || Error::Overflow(format!("{value} cannot be scaled up to {digits} digits", value = self));
            let factor = pow10(growth).ok_or_else(overflow)?;
            let grown = U256::from_u128(self.coefficient())
                .checked_mul(&factor)
                .ok_or_else(overflow)?;
            let value = grown.to_u128().ok_or_else(overflow)?;
            return Decimal::from_coefficient(value, digits, self.is_sign_negative());
        }
        if digits == self.scale() {
            return Ok(*self);
        }
        let shift = self.scale() - digits;
        let coefficient = U256::from_u128(self.coefficient());
        let total = number_of_digits(coefficient);
        let target = total as i64 - shift as i64;
        let rounded = round_to_digits(coefficient, target, mode);

        let value = rounded
            .to_u128()
            .ok_or_else(|| Error::internal("rounded coefficient did not fit u128"))?;

        Decimal::from_coefficient(value, digits, self.is_sign_negative())
    }

    /// Truncates (rounds toward zero) to `digits` places.
    pub fn truncate(&self, digits: u32) -> Result<Decimal> {
        self.round(digits, RoundingMode::Down)
    }

    /// The largest integer value `<= self`.
    #[must_use]
    pub fn floor(&self) -> Decimal {
        self.floor_or_ceil(true)
    }

    /// The smallest integer value `>= self`.
    #[must_use]
    pub fn ceil(&self) -> Decimal {
        self.floor_or_ceil(false)
    }

    fn floor_or_ceil(&self, toward_negative_infinity: bool) -> Decimal {
        if self.scale() == 0 {
            return *self;
        }
        let coefficient = U256::from_u128(self.coefficient());
        let total = number_of_digits(coefficient);
        let int_digits = total.saturating_sub(self.scale());
        let truncated = round_to_digits(coefficient, int_digits as i64, RoundingMode::Down);
        let has_fraction = {
            let divisor = pow10(self.scale()).expect("scale stays within the pow10 cache");
            let (_, remainder) = coefficient.divmod(&divisor);
            !remainder.is_zero()
        };
        let round_away_from_zero = has_fraction
            && ((toward_negative_infinity && self.is_sign_negative())
                || (!toward_negative_infinity && !self.is_sign_negative()));
        let truncated = if round_away_from_zero {
            truncated.checked_add(&U256::from_u64(1)).expect("floor/ceil carry stays within U256")
        } else {
            truncated
        };
        let value = truncated.to_u128().expect("floor/ceil result fits u128");
        Decimal::from_coefficient(value, 0, self.is_sign_negative() && value != 0)
            .expect("floor/ceil result always fits the coefficient envelope")
    }
}
